use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Coord;

/// Externally assigned, unique order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weighted pickup-and-delivery request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub pickup: Coord,
    pub delivery: Coord,
    pub weight: f64,
}

impl Order {
    pub fn new(id: u32, pickup: Coord, delivery: Coord, weight: f64) -> Self {
        Self {
            id: OrderId(id),
            pickup,
            delivery,
            weight,
        }
    }
}
