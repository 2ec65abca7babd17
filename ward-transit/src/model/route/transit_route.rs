use super::{DeclaredDuration, Stop};
use serde::{Deserialize, Serialize};

/// an operator route: ordered stops and the duration the operator publishes for it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Route {
    pub route_id: String,
    pub declared_duration: Option<DeclaredDuration>,
    pub stops: Vec<Stop>,
}

impl Route {
    pub fn new(
        route_id: String,
        declared_duration: Option<DeclaredDuration>,
        stops: Vec<Stop>,
    ) -> Route {
        Route {
            route_id,
            declared_duration,
            stops,
        }
    }
}
