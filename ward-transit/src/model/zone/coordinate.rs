use geo::{Coord, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::EstimationError;

/// a WGS84 (latitude, longitude) pair identifying a physical location, such as a bus stop.
///
/// zone boundaries are stored in GeoJSON axis order, where x is longitude and y is
/// latitude. [`Coordinate::to_coord`] is the single place where this axis swap happens,
/// all containment tests go through it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "CoordinateRecord")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

/// unvalidated serialized form of a [`Coordinate`].
#[derive(Deserialize)]
struct CoordinateRecord {
    lat: f64,
    lon: f64,
}

impl TryFrom<CoordinateRecord> for Coordinate {
    type Error = EstimationError;

    fn try_from(value: CoordinateRecord) -> Result<Self, Self::Error> {
        Coordinate::new(value.lat, value.lon)
    }
}

impl Coordinate {
    /// creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Coordinate, EstimationError> {
        let invalid = |msg: &str| EstimationError::InvalidCoordinate {
            lat,
            lon,
            msg: String::from(msg),
        };
        if !lat.is_finite() || !lon.is_finite() {
            return Err(invalid("values must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(invalid("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(invalid("longitude must be in [-180, 180]"));
        }
        Ok(Coordinate { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// this coordinate in boundary axis order (x=lon, y=lat).
    pub fn to_coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }

    pub fn to_point(&self) -> Point<f64> {
        Point(self.to_coord())
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
