mod observation_zone_key;
mod spatial_index_type;
mod ward_transit_configuration;
mod zone_property_config;

pub use observation_zone_key::ObservationZoneKey;
pub use spatial_index_type::SpatialIndexType;
pub use ward_transit_configuration::WardTransitConfiguration;
pub use zone_property_config::ZonePropertyConfig;
