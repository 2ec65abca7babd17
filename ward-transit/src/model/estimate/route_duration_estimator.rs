use super::{DurationEstimate, HopEstimate, HopOutcome};
use crate::model::{route::ZoneSequence, travel_time::TravelTimeTable};

/// sums mean zone-to-zone travel times over the hops of a zone sequence.
///
/// hops without data (an unresolved end, or no provider sample for the pair) add
/// zero seconds and set `has_missing_data`. this understates the total whenever
/// data is missing; callers comparing against operator durations should report the
/// flag next to the estimate rather than treat it as complete.
pub struct RouteDurationEstimator<'a> {
    table: &'a TravelTimeTable,
}

impl<'a> RouteDurationEstimator<'a> {
    pub fn new(table: &'a TravelTimeTable) -> Self {
        Self { table }
    }

    pub fn estimate(&self, zone_sequence: &ZoneSequence) -> DurationEstimate {
        let (estimate, _) = self.estimate_with_hops(zone_sequence);
        estimate
    }

    /// the estimate together with the outcome of each hop, in route order.
    pub fn estimate_with_hops(
        &self,
        zone_sequence: &ZoneSequence,
    ) -> (DurationEstimate, Vec<HopEstimate>) {
        let hops = self.hop_estimates(zone_sequence);
        let total_seconds: f64 = hops.iter().map(HopEstimate::seconds_or_zero).sum();
        let has_missing_data = hops.iter().any(HopEstimate::is_missing);
        let estimate = DurationEstimate::from_seconds(total_seconds, has_missing_data);
        (estimate, hops)
    }

    fn hop_estimates(&self, zone_sequence: &ZoneSequence) -> Vec<HopEstimate> {
        zone_sequence
            .hops()
            .map(|hop| {
                let outcome = match hop.zone_ids() {
                    None => HopOutcome::UnresolvedZone,
                    Some((src, dst)) => match self.table.mean_duration(&src, &dst) {
                        Some(mean_seconds) => HopOutcome::Observed { mean_seconds },
                        None => HopOutcome::NoObservations,
                    },
                };
                HopEstimate {
                    src: hop.src.clone(),
                    dst: hop.dst.clone(),
                    outcome,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::travel_time::TravelTimeObservation;
    use crate::model::zone::{ZoneId, ZoneResolution};

    fn resolved(id: u32) -> ZoneResolution {
        ZoneResolution::Resolved {
            zone_id: ZoneId(id),
            zone_name: format!("ward {id}"),
        }
    }

    fn table(rows: &[(u32, u32, f64)]) -> TravelTimeTable {
        TravelTimeTable::new(rows.iter().map(|(src, dst, seconds)| {
            TravelTimeObservation::new(ZoneId(*src), ZoneId(*dst), *seconds, None)
                .expect("valid observation")
        }))
    }

    #[test]
    fn test_degenerate_sequences() {
        let table = table(&[(1, 2, 600.0)]);
        let estimator = RouteDurationEstimator::new(&table);
        let zero = DurationEstimate {
            hours: 0,
            minutes: 0,
            has_missing_data: false,
        };
        assert_eq!(estimator.estimate(&ZoneSequence::default()), zero);
        assert_eq!(estimator.estimate(&ZoneSequence::new(vec![resolved(1)])), zero);
        assert_eq!(
            estimator.estimate(&ZoneSequence::new(vec![ZoneResolution::Unresolved])),
            zero
        );
    }

    #[test]
    fn test_complete_data() {
        let table = table(&[(1, 2, 1800.0), (2, 3, 2400.0), (2, 3, 3600.0)]);
        let estimator = RouteDurationEstimator::new(&table);
        let seq = ZoneSequence::new(vec![resolved(1), resolved(2), resolved(3)]);
        assert_eq!(
            estimator.estimate(&seq),
            DurationEstimate {
                hours: 1,
                minutes: 20,
                has_missing_data: false
            }
        );
    }

    #[test]
    fn test_missing_hop_counts_as_zero() {
        // zones 1, 2, 3 with observations (1,2) = 600s twice and nothing for (2,3)
        let table = table(&[(1, 2, 600.0), (1, 2, 600.0)]);
        let estimator = RouteDurationEstimator::new(&table);
        let seq = ZoneSequence::new(vec![resolved(1), resolved(2), resolved(3)]);
        let (estimate, hops) = estimator.estimate_with_hops(&seq);
        assert_eq!(
            estimate,
            DurationEstimate {
                hours: 0,
                minutes: 10,
                has_missing_data: true
            }
        );
        assert_eq!(hops.len(), 2);
        assert_eq!(hops[1].outcome, HopOutcome::NoObservations);
    }

    #[test]
    fn test_reverse_direction_is_missing() {
        let table = table(&[(1, 2, 600.0)]);
        let estimator = RouteDurationEstimator::new(&table);
        let seq = ZoneSequence::new(vec![resolved(2), resolved(1)]);
        let estimate = estimator.estimate(&seq);
        assert!(estimate.has_missing_data);
        assert_eq!(estimate.total_minutes(), 0);
    }

    #[test]
    fn test_unresolved_hops_are_missing() {
        let table = table(&[(1, 2, 600.0), (2, 3, 1200.0)]);
        let estimator = RouteDurationEstimator::new(&table);
        let seq = ZoneSequence::new(vec![
            resolved(1),
            resolved(2),
            ZoneResolution::Unresolved,
            resolved(3),
        ]);
        let (estimate, hops) = estimator.estimate_with_hops(&seq);
        assert_eq!(estimate.total_minutes(), 10);
        assert!(estimate.has_missing_data);
        let outcomes = hops.into_iter().map(|h| h.outcome).collect::<Vec<_>>();
        assert_eq!(
            outcomes,
            vec![
                HopOutcome::Observed { mean_seconds: 600.0 },
                HopOutcome::UnresolvedZone,
                HopOutcome::UnresolvedZone,
            ]
        );
    }
}
