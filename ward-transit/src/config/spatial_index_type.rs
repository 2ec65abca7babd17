use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// lookup structure used to resolve stop coordinates to zones. both return the
/// same zone for every coordinate.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpatialIndexType {
    Linear,
    #[default]
    Rtree,
}

impl Display for SpatialIndexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpatialIndexType::Linear => write!(f, "linear"),
            SpatialIndexType::Rtree => write!(f, "rtree"),
        }
    }
}
