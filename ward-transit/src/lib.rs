//! estimates bus route durations by resolving each route's stops to zones ("wards")
//! and summing mean zone-to-zone travel times reported by a mobility provider.
pub mod app;
pub mod config;
pub mod model;
