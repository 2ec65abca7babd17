use super::{read_zones, run_estimate, WardTransitAppError};
use crate::config::{SpatialIndexType, WardTransitConfiguration};
use crate::model::zone::{Coordinate, ZoneIndex, ZoneRTree, ZoneResolver};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::fs::File;

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum WardTransitOperation {
    /// estimate the duration of every route and compare it with the declared duration
    Estimate {
        /// GeoJSON file of zone boundaries
        #[arg(long)]
        zones_file: String,
        /// CSV file of operator routes with stop lists
        #[arg(long)]
        routes_file: String,
        /// CSV file of zone-to-zone travel times
        #[arg(long)]
        travel_times_file: String,
        /// CSV file to write comparison rows to
        #[arg(long)]
        output_file: String,
        /// .toml or .json file with run parameters
        #[arg(long)]
        configuration_file: Option<String>,
        /// overrides the configured thread pool size
        #[arg(long)]
        parallelism: Option<usize>,
    },
    /// print the zone containing a coordinate
    Resolve {
        /// GeoJSON file of zone boundaries
        #[arg(long)]
        zones_file: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// .toml or .json file with run parameters
        #[arg(long)]
        configuration_file: Option<String>,
    },
}

impl WardTransitOperation {
    pub fn run(&self) -> Result<(), WardTransitAppError> {
        match self {
            WardTransitOperation::Estimate {
                zones_file,
                routes_file,
                travel_times_file,
                output_file,
                configuration_file,
                parallelism,
            } => {
                let mut conf = read_configuration(configuration_file)?;
                if let Some(p) = parallelism {
                    conf.parallelism = (*p).max(1);
                }
                let summary =
                    run_estimate(zones_file, routes_file, travel_times_file, output_file, &conf)?;
                if summary.n_missing_data > 0 {
                    log::warn!(
                        "{} routes are missing travel time data for at least one hop, their estimates only sum the hops with data",
                        summary.n_missing_data
                    );
                }
                Ok(())
            }
            WardTransitOperation::Resolve {
                zones_file,
                lat,
                lon,
                configuration_file,
            } => {
                let conf = read_configuration(configuration_file)?;
                let coordinate = Coordinate::new(*lat, *lon)?;
                let zones = read_zones(File::open(zones_file)?, &conf.zone_properties)?;
                let index = ZoneIndex::try_new(zones)?;
                let resolution = match conf.spatial_index {
                    SpatialIndexType::Linear => index.resolve(&coordinate),
                    SpatialIndexType::Rtree => ZoneRTree::new(index).resolve(&coordinate),
                };
                println!("{coordinate} -> {resolution}");
                Ok(())
            }
        }
    }
}

fn read_configuration(
    configuration_file: &Option<String>,
) -> Result<WardTransitConfiguration, WardTransitAppError> {
    match configuration_file {
        None => Ok(WardTransitConfiguration::default()),
        Some(f) => {
            log::info!("reading ward-transit configuration from {f}");
            WardTransitConfiguration::try_from(f)
        }
    }
}
