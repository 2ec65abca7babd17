use super::{DurationEstimate, HopEstimate};
use crate::model::route::{DeclaredDuration, ZoneSequence};
use serde::{Deserialize, Serialize};

/// estimation result for one route, kept next to the operator's declared duration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteEstimate {
    pub route_id: String,
    pub declared_duration: Option<DeclaredDuration>,
    pub zone_sequence: ZoneSequence,
    pub hops: Vec<HopEstimate>,
    pub estimate: DurationEstimate,
}

impl RouteEstimate {
    pub fn n_missing_hops(&self) -> usize {
        self.hops.iter().filter(|h| h.is_missing()).count()
    }

    /// estimated minus declared duration in minutes, when the operator declared one.
    pub fn difference_minutes(&self) -> Option<i64> {
        self.declared_duration
            .map(|d| self.estimate.total_minutes() as i64 - d.total_minutes() as i64)
    }
}
