use super::{read_routes, read_travel_times, read_zones, ComparisonRow, WardTransitAppError};
use crate::config::{SpatialIndexType, WardTransitConfiguration};
use crate::model::{
    estimate::RouteEstimator,
    route::Route,
    travel_time::TravelTimeTable,
    zone::{ZoneIndex, ZoneRTree, ZoneResolver},
};
use itertools::Itertools;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use std::{
    fs::File,
    path::Path,
    sync::{Arc, Mutex},
};

/// counts reported at the end of an estimation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EstimateSummary {
    pub n_routes: usize,
    pub n_estimated: usize,
    pub n_missing_data: usize,
    pub n_failed: usize,
    pub n_observations_skipped: usize,
}

/// estimates every route in `routes_file` from the zone boundaries and provider travel
/// times, writing one [`ComparisonRow`] per route to `output_file` in input order.
///
/// malformed routes and travel time rows are logged and reported, they do not stop the run.
///
/// # Arguments
///
/// * `zones_file` - GeoJSON zone boundaries
/// * `routes_file` - operator route CSV
/// * `travel_times_file` - provider travel time CSV
/// * `output_file` - CSV file to write comparison rows to
/// * `conf` - run configuration
pub fn run_estimate(
    zones_file: &str,
    routes_file: &str,
    travel_times_file: &str,
    output_file: &str,
    conf: &WardTransitConfiguration,
) -> Result<EstimateSummary, WardTransitAppError> {
    let output_path = Path::new(output_file);
    if output_path.exists() && !conf.overwrite {
        return Err(WardTransitAppError::OtherError(format!(
            "output file {output_file} already exists and overwrite is not enabled"
        )));
    }

    let zones = read_zones(File::open(zones_file)?, &conf.zone_properties)?;
    let index = ZoneIndex::try_new(zones)?;

    let filter = conf.hour_of_day_filter()?;
    let (observations, skipped): (Vec<_>, Vec<_>) = read_travel_times(
        File::open(travel_times_file)?,
        conf.observation_zone_key,
        &index,
    )
    .into_iter()
    .partition_result();
    for e in skipped.iter() {
        log::warn!("skipping travel time {e}");
    }
    let table = TravelTimeTable::with_filter(observations, filter);
    log::info!(
        "loaded {} travel time observations over {} zone pairs, {} outside the hour filter, {} malformed",
        table.n_observations(),
        table.n_pairs(),
        table.n_filtered(),
        skipped.len()
    );

    let resolver: Box<dyn ZoneResolver> = match conf.spatial_index {
        SpatialIndexType::Linear => Box::new(index),
        SpatialIndexType::Rtree => Box::new(ZoneRTree::new(index)),
    };
    log::info!("resolving stops with {} zone lookup", conf.spatial_index);

    let routes: Vec<Result<Route, (Option<String>, String)>> =
        read_routes(File::open(routes_file)?)
            .into_iter()
            .map(|r| r.map_err(|e| (e.route_id().map(String::from), e.to_string())))
            .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(conf.parallelism)
        .build()?;
    let estimator = RouteEstimator::new(resolver.as_ref(), &table);
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("estimate routes")
            .total(routes.len())
            .build()
            .map_err(WardTransitAppError::OtherError)?,
    ));
    let rows: Vec<ComparisonRow> = pool.install(|| {
        routes
            .par_iter()
            .map(|route| {
                if let Ok(mut bar) = bar.clone().lock() {
                    let _ = bar.update(1);
                }
                match route {
                    Ok(route) => ComparisonRow::from(&estimator.estimate_route(route)),
                    Err((route_id, e)) => {
                        log::warn!("skipping route {e}");
                        ComparisonRow::failure(route_id.clone(), e.clone())
                    }
                }
            })
            .collect()
    });
    eprintln!();

    let mut writer = csv::Writer::from_path(output_path)?;
    for row in rows.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let summary = summarize(&rows, skipped.len());
    log::info!(
        "estimated {} of {} routes ({} with missing data, {} failed), wrote {}",
        summary.n_estimated,
        summary.n_routes,
        summary.n_missing_data,
        summary.n_failed,
        output_file
    );
    Ok(summary)
}

fn summarize(rows: &[ComparisonRow], n_observations_skipped: usize) -> EstimateSummary {
    let n_failed = rows.iter().filter(|r| r.error.is_some()).count();
    EstimateSummary {
        n_routes: rows.len(),
        n_estimated: rows.len() - n_failed,
        n_missing_data: rows
            .iter()
            .filter(|r| r.has_missing_data == Some(true))
            .count(),
        n_failed,
        n_observations_skipped,
    }
}
