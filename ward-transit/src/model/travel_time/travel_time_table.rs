use super::{HourOfDayFilter, TravelTimeObservation};
use crate::model::zone::ZoneId;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default)]
struct PairStatistics {
    sum_seconds: f64,
    count: usize,
}

/// provider travel times between ordered zone pairs, loaded once and read-only afterward.
///
/// direction matters: observations from A to B say nothing about B to A.
#[derive(Clone, Debug, Default)]
pub struct TravelTimeTable {
    pairs: HashMap<(ZoneId, ZoneId), PairStatistics>,
    filter: HourOfDayFilter,
    n_observations: usize,
    n_filtered: usize,
}

impl TravelTimeTable {
    /// builds a table admitting every observation.
    pub fn new<I>(observations: I) -> TravelTimeTable
    where
        I: IntoIterator<Item = TravelTimeObservation>,
    {
        TravelTimeTable::with_filter(observations, HourOfDayFilter::AllHours)
    }

    /// builds a table from the observations the filter admits. the filter applies
    /// only here, queries never fall back to other hours.
    pub fn with_filter<I>(observations: I, filter: HourOfDayFilter) -> TravelTimeTable
    where
        I: IntoIterator<Item = TravelTimeObservation>,
    {
        let mut pairs: HashMap<(ZoneId, ZoneId), PairStatistics> = HashMap::new();
        let mut n_observations = 0;
        let mut n_filtered = 0;
        for obs in observations {
            if !filter.admits(obs.hour_of_day()) {
                n_filtered += 1;
                continue;
            }
            let stats = pairs
                .entry((obs.src_zone_id(), obs.dst_zone_id()))
                .or_default();
            stats.sum_seconds += obs.duration_seconds();
            stats.count += 1;
            n_observations += 1;
        }
        log::debug!(
            "travel time table built with {} observations over {} zone pairs ({} filtered out)",
            n_observations,
            pairs.len(),
            n_filtered
        );
        TravelTimeTable {
            pairs,
            filter,
            n_observations,
            n_filtered,
        }
    }

    /// arithmetic mean travel time in seconds from `src` to `dst`, or None if the
    /// provider reported nothing for this ordered pair.
    pub fn mean_duration(&self, src: &ZoneId, dst: &ZoneId) -> Option<f64> {
        self.pairs
            .get(&(*src, *dst))
            .filter(|stats| stats.count > 0)
            .map(|stats| stats.sum_seconds / stats.count as f64)
    }

    pub fn observation_count(&self, src: &ZoneId, dst: &ZoneId) -> usize {
        self.pairs
            .get(&(*src, *dst))
            .map(|stats| stats.count)
            .unwrap_or_default()
    }

    pub fn filter(&self) -> &HourOfDayFilter {
        &self.filter
    }

    /// number of ordered zone pairs with at least one observation
    pub fn n_pairs(&self) -> usize {
        self.pairs.len()
    }

    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// observations rejected by the hour of day filter
    pub fn n_filtered(&self) -> usize {
        self.n_filtered
    }
}
