use super::{Zone, ZoneId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// outcome of resolving a coordinate against the zone dataset. a coordinate outside
/// of every zone boundary is [`ZoneResolution::Unresolved`], which is a regular value
/// and compares equal to other unresolved results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ZoneResolution {
    Resolved { zone_id: ZoneId, zone_name: String },
    Unresolved,
}

impl ZoneResolution {
    pub fn zone_id(&self) -> Option<ZoneId> {
        match self {
            ZoneResolution::Resolved { zone_id, .. } => Some(*zone_id),
            ZoneResolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ZoneResolution::Resolved { .. })
    }
}

impl From<&Zone> for ZoneResolution {
    fn from(zone: &Zone) -> Self {
        ZoneResolution::Resolved {
            zone_id: zone.id,
            zone_name: zone.name.clone(),
        }
    }
}

impl Display for ZoneResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneResolution::Resolved { zone_id, zone_name } => write!(f, "{zone_id} ({zone_name})"),
            ZoneResolution::Unresolved => write!(f, "unresolved"),
        }
    }
}
