use super::{Route, ZoneSequence};
use crate::model::zone::ZoneResolver;
use itertools::Itertools;

/// collapses the stops of a route into the ordered list of distinct zones they fall in.
pub struct RouteZoneSequencer<'a, R: ZoneResolver + ?Sized> {
    resolver: &'a R,
}

impl<'a, R: ZoneResolver + ?Sized> RouteZoneSequencer<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    /// resolves every stop, then keeps each distinct zone at the position where it
    /// first appears, so stops resolving to [A, B, A, C, B] become [A, B, C].
    ///
    /// unresolved stops stay in the sequence as a single unresolved entry at the
    /// position of the first unresolved stop.
    pub fn sequence(&self, route: &Route) -> ZoneSequence {
        route
            .stops
            .iter()
            .map(|stop| self.resolver.resolve(&stop.coordinate))
            .unique()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::route::Stop;
    use crate::model::zone::{Coordinate, Zone, ZoneId, ZoneIndex, ZoneRTree, ZoneResolution};
    use geo::{polygon, MultiPolygon};

    /// zones 1..=3 laid out west to east, each one degree wide
    fn three_zones() -> ZoneIndex {
        let zones = (1..=3)
            .map(|id| {
                let x0 = id as f64;
                let x1 = x0 + 1.0;
                let p = polygon![(x: x0, y: 0.0), (x: x1, y: 0.0), (x: x1, y: 1.0), (x: x0, y: 1.0)];
                Zone::new(ZoneId(id), format!("Z{id}"), MultiPolygon::new(vec![p]))
            })
            .collect_vec();
        ZoneIndex::try_new(zones).expect("unique zone ids")
    }

    /// a stop in the middle of zone `id`, or outside every zone for 0
    fn stop_in(id: u32) -> Stop {
        let lon = if id == 0 { 50.0 } else { id as f64 + 0.5 };
        Stop::new(
            Coordinate::new(0.5, lon).expect("test coordinate is valid"),
            format!("stop in {id}"),
        )
    }

    fn route(zone_ids: &[u32]) -> Route {
        Route::new(
            String::from("test"),
            None,
            zone_ids.iter().map(|id| stop_in(*id)).collect(),
        )
    }

    fn ids(seq: &ZoneSequence) -> Vec<Option<ZoneId>> {
        seq.iter().map(|z| z.zone_id()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let index = three_zones();
        let seq = RouteZoneSequencer::new(&index).sequence(&route(&[1, 2, 1, 3, 2]));
        assert_eq!(
            ids(&seq),
            vec![Some(ZoneId(1)), Some(ZoneId(2)), Some(ZoneId(3))]
        );
    }

    #[test]
    fn test_adjacent_duplicates() {
        let index = three_zones();
        let seq = RouteZoneSequencer::new(&index).sequence(&route(&[2, 2, 2, 1, 1]));
        assert_eq!(ids(&seq), vec![Some(ZoneId(2)), Some(ZoneId(1))]);
    }

    #[test]
    fn test_unresolved_kept_once() {
        let index = three_zones();
        let seq = RouteZoneSequencer::new(&index).sequence(&route(&[1, 0, 2, 0, 3]));
        assert_eq!(
            ids(&seq),
            vec![Some(ZoneId(1)), None, Some(ZoneId(2)), Some(ZoneId(3))]
        );
        assert!(seq.has_unresolved());
    }

    #[test]
    fn test_degenerate_routes() {
        let index = three_zones();
        let sequencer = RouteZoneSequencer::new(&index);
        assert!(sequencer.sequence(&route(&[])).is_empty());
        let single = sequencer.sequence(&route(&[3]));
        assert_eq!(single.len(), 1);
        assert_eq!(single.hops().count(), 0);
    }

    #[test]
    fn test_dynamic_resolver() {
        let rtree = ZoneRTree::new(three_zones());
        let resolver: &dyn ZoneResolver = &rtree;
        let seq = RouteZoneSequencer::new(resolver).sequence(&route(&[3, 1]));
        assert_eq!(
            seq.iter().cloned().collect_vec(),
            vec![
                ZoneResolution::Resolved {
                    zone_id: ZoneId(3),
                    zone_name: String::from("Z3")
                },
                ZoneResolution::Resolved {
                    zone_id: ZoneId(1),
                    zone_name: String::from("Z1")
                },
            ]
        );
    }
}
