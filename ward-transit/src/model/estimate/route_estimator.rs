use super::{RouteDurationEstimator, RouteEstimate};
use crate::model::{
    route::{Route, RouteZoneSequencer},
    travel_time::TravelTimeTable,
    zone::ZoneResolver,
};
use rayon::prelude::*;

/// runs zone sequencing and duration estimation for routes against one zone dataset
/// and one travel time table. both are read-only, so routes can be estimated in parallel.
pub struct RouteEstimator<'a, R: ZoneResolver + ?Sized> {
    sequencer: RouteZoneSequencer<'a, R>,
    duration_estimator: RouteDurationEstimator<'a>,
}

impl<'a, R: ZoneResolver + ?Sized> RouteEstimator<'a, R> {
    pub fn new(resolver: &'a R, table: &'a TravelTimeTable) -> Self {
        Self {
            sequencer: RouteZoneSequencer::new(resolver),
            duration_estimator: RouteDurationEstimator::new(table),
        }
    }

    pub fn estimate_route(&self, route: &Route) -> RouteEstimate {
        let zone_sequence = self.sequencer.sequence(route);
        let (estimate, hops) = self.duration_estimator.estimate_with_hops(&zone_sequence);
        log::debug!(
            "route {}: {} stops, {} zones, estimate {}",
            route.route_id,
            route.stops.len(),
            zone_sequence.len(),
            estimate
        );
        RouteEstimate {
            route_id: route.route_id.clone(),
            declared_duration: route.declared_duration,
            zone_sequence,
            hops,
            estimate,
        }
    }

    /// estimates every route on the current rayon thread pool. results keep the
    /// order of the input routes.
    pub fn estimate_routes(&self, routes: &[Route]) -> Vec<RouteEstimate> {
        routes
            .par_iter()
            .map(|route| self.estimate_route(route))
            .collect()
    }
}
