mod declared_duration;
mod route_zone_sequencer;
mod stop;
mod transit_route;
mod zone_sequence;

pub use declared_duration::DeclaredDuration;
pub use route_zone_sequencer::RouteZoneSequencer;
pub use stop::Stop;
pub use transit_route::Route;
pub use zone_sequence::{ZoneHop, ZoneSequence};
