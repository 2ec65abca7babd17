use crate::model::estimate::RouteEstimate;
use serde::{Deserialize, Serialize};

/// one output row comparing the estimated and the declared duration of a route.
/// routes that could not be read carry only their id, when known, and the error message.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ComparisonRow {
    pub route_id: Option<String>,
    pub declared_minutes: Option<u32>,
    pub estimated_hours: Option<u64>,
    pub estimated_minutes: Option<u64>,
    pub estimated_total_minutes: Option<u64>,
    /// estimated minus declared minutes
    pub difference_minutes: Option<i64>,
    pub has_missing_data: Option<bool>,
    pub n_zones: Option<usize>,
    pub n_hops: Option<usize>,
    pub n_missing_hops: Option<usize>,
    pub error: Option<String>,
}

impl ComparisonRow {
    pub fn failure(route_id: Option<String>, error: String) -> ComparisonRow {
        ComparisonRow {
            route_id,
            error: Some(error),
            ..Default::default()
        }
    }
}

impl From<&RouteEstimate> for ComparisonRow {
    fn from(route: &RouteEstimate) -> Self {
        ComparisonRow {
            route_id: Some(route.route_id.clone()),
            declared_minutes: route.declared_duration.map(|d| d.total_minutes()),
            estimated_hours: Some(route.estimate.hours),
            estimated_minutes: Some(route.estimate.minutes),
            estimated_total_minutes: Some(route.estimate.total_minutes()),
            difference_minutes: route.difference_minutes(),
            has_missing_data: Some(route.estimate.has_missing_data),
            n_zones: Some(route.zone_sequence.len()),
            n_hops: Some(route.hops.len()),
            n_missing_hops: Some(route.n_missing_hops()),
            error: None,
        }
    }
}
