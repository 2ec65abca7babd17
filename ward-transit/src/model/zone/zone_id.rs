use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::EstimationError;

/// identifier of a zone (ward number) in the zone boundary dataset.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub u32);

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ZoneId {
    type Error = EstimationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(ZoneId)
            .map_err(|_| EstimationError::InvalidZoneId(value))
    }
}
