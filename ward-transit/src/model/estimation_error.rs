use super::zone::ZoneId;

/// malformed input handed to the estimation engine. unresolved coordinates and
/// missing travel time data are not errors, they are carried as data.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    #[error("invalid coordinate (lat={lat}, lon={lon}): {msg}")]
    InvalidCoordinate { lat: f64, lon: f64, msg: String },
    #[error("invalid travel time of {0} seconds, must be finite and positive")]
    InvalidTravelTime(f64),
    #[error("invalid hour of day {0}, must be in [0, 23]")]
    InvalidHourOfDay(i64),
    #[error("invalid zone id {0}, must be a non-negative integer")]
    InvalidZoneId(i64),
    #[error("invalid declared duration '{0}', expected HH:MM, HH:MM:SS or whole minutes")]
    InvalidDeclaredDuration(String),
    #[error("zone {zone_id} has unsupported geometry type {geometry_type}, must be Polygon or MultiPolygon")]
    UnsupportedZoneGeometry {
        zone_id: ZoneId,
        geometry_type: String,
    },
    #[error("zone id {0} appears more than once in the zone dataset")]
    DuplicateZoneId(ZoneId),
}
