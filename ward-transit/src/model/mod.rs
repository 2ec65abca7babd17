pub mod estimate;
mod estimation_error;
pub mod route;
pub mod travel_time;
pub mod zone;

pub use estimation_error::EstimationError;
