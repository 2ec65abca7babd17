use super::{Coordinate, ZoneId};
use crate::model::EstimationError;
use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{BoundingRect, Geometry, MultiPolygon, Rect};

/// a named, numbered geographic region such as a city ward.
///
/// boundaries are in (x=lon, y=lat) order and may have several parts and holes.
#[derive(Clone, Debug)]
pub struct Zone {
    pub id: ZoneId,
    /// display name, not guaranteed to be unique
    pub name: String,
    /// identifier used by the travel time provider for this zone, if known
    pub movement_id: Option<u32>,
    pub boundary: MultiPolygon<f64>,
}

impl Zone {
    pub fn new(id: ZoneId, name: String, boundary: MultiPolygon<f64>) -> Zone {
        Zone {
            id,
            name,
            movement_id: None,
            boundary,
        }
    }

    pub fn with_movement_id(mut self, movement_id: u32) -> Zone {
        self.movement_id = Some(movement_id);
        self
    }

    /// builds a zone from any polygonal geometry. other geometry types are rejected.
    pub fn try_from_geometry(
        id: ZoneId,
        name: String,
        geometry: Geometry<f64>,
    ) -> Result<Zone, EstimationError> {
        let boundary = match geometry {
            Geometry::Polygon(p) => MultiPolygon::new(vec![p]),
            Geometry::MultiPolygon(mp) => mp,
            other => {
                return Err(EstimationError::UnsupportedZoneGeometry {
                    zone_id: id,
                    geometry_type: geometry_type_name(&other).to_string(),
                })
            }
        };
        Ok(Zone::new(id, name, boundary))
    }

    /// true if the coordinate lies inside or on the boundary of this zone. points
    /// inside a hole are outside of the zone, points on a ring count as inside.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.boundary.coordinate_position(&coordinate.to_coord()) != CoordPos::Outside
    }

    /// bounding box of the boundary, None for an empty boundary.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.boundary.bounding_rect()
    }
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
