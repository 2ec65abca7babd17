use super::{Coordinate, Zone, ZoneResolution};

/// finds the zone containing a coordinate.
///
/// implementations must agree with a linear scan over the zones in load order: when
/// several boundaries contain the point, the zone loaded first wins.
pub trait ZoneResolver: Send + Sync {
    /// the first zone, in load order, whose boundary contains the coordinate.
    fn find(&self, coordinate: &Coordinate) -> Option<&Zone>;

    fn resolve(&self, coordinate: &Coordinate) -> ZoneResolution {
        self.find(coordinate)
            .map(ZoneResolution::from)
            .unwrap_or(ZoneResolution::Unresolved)
    }
}
