use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// which zone identifier the travel time dataset uses in its source and
/// destination columns.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ObservationZoneKey {
    /// rows refer to zones by zone id (ward number)
    ZoneId,
    /// rows refer to zones by the provider's movement id, translated through the
    /// zone dataset
    #[default]
    MovementId,
}
