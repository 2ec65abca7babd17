use crate::model::zone::Coordinate;
use serde::{Deserialize, Serialize};

/// one bus stop along a route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Stop {
    pub coordinate: Coordinate,
    pub label: String,
}

impl Stop {
    pub fn new(coordinate: Coordinate, label: String) -> Stop {
        Stop { coordinate, label }
    }
}
