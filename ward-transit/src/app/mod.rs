mod comparison_row;
mod estimate_ops;
mod operation;
mod route_reader;
mod travel_time_reader;
mod ward_transit_app;
mod ward_transit_app_error;
mod zone_reader;

pub use comparison_row::ComparisonRow;
pub use estimate_ops::{run_estimate, EstimateSummary};
pub use operation::WardTransitOperation;
pub use route_reader::read_routes;
pub use travel_time_reader::read_travel_times;
pub use ward_transit_app::WardTransitApp;
pub use ward_transit_app_error::WardTransitAppError;
pub use zone_reader::read_zones;
