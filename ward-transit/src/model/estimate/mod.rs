mod duration_estimate;
mod hop_estimate;
mod route_duration_estimator;
mod route_estimate;
mod route_estimator;

pub use duration_estimate::DurationEstimate;
pub use hop_estimate::{HopEstimate, HopOutcome};
pub use route_duration_estimator::RouteDurationEstimator;
pub use route_estimate::RouteEstimate;
pub use route_estimator::RouteEstimator;
