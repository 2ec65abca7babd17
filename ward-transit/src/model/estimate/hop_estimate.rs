use crate::model::zone::ZoneResolution;
use serde::{Deserialize, Serialize};

/// travel time result for a single hop between consecutive zones.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum HopOutcome {
    /// mean of the provider samples for this ordered zone pair
    Observed { mean_seconds: f64 },
    /// one or both ends of the hop did not resolve to a zone
    UnresolvedZone,
    /// both zones resolved but the provider has no sample for the pair
    NoObservations,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HopEstimate {
    pub src: ZoneResolution,
    pub dst: ZoneResolution,
    pub outcome: HopOutcome,
}

impl HopEstimate {
    pub fn is_missing(&self) -> bool {
        !matches!(self.outcome, HopOutcome::Observed { .. })
    }

    /// contribution of this hop to the route total. missing hops count as zero.
    pub fn seconds_or_zero(&self) -> f64 {
        match self.outcome {
            HopOutcome::Observed { mean_seconds } => mean_seconds,
            HopOutcome::UnresolvedZone | HopOutcome::NoObservations => 0.0,
        }
    }
}
