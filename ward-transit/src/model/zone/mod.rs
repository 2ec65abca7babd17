mod coordinate;
mod zone_boundary;
mod zone_id;
mod zone_index;
mod zone_resolution;
mod zone_resolver;
mod zone_rtree;

pub use coordinate::Coordinate;
pub use zone_boundary::Zone;
pub use zone_id::ZoneId;
pub use zone_index::ZoneIndex;
pub use zone_resolution::ZoneResolution;
pub use zone_resolver::ZoneResolver;
pub use zone_rtree::ZoneRTree;
