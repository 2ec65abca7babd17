use serde::{Deserialize, Serialize};

/// names of the GeoJSON feature properties describing each zone.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ZonePropertyConfig {
    pub id_property: String,
    pub name_property: String,
    /// property holding the travel time provider's zone id, if the dataset has one
    pub movement_id_property: Option<String>,
}

impl Default for ZonePropertyConfig {
    fn default() -> Self {
        Self {
            id_property: String::from("WARD_NO"),
            name_property: String::from("WARD_NAME"),
            movement_id_property: Some(String::from("MOVEMENT_ID")),
        }
    }
}
