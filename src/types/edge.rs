//! Definition of the [`Road`] type, the weight carried by every edge
//! of the road map.
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A road is a directed connection between two nodes.
///
/// The cost of a road is the time it takes to drive it at its speed
/// limit, in hours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Road {
    /// Length of the road.
    pub distance_km: OrderedFloat<f32>,

    /// Speed limit of the road. Must be positive.
    pub speed_kmh: OrderedFloat<f32>,
}

impl Road {
    /// Creates a road of the given length and speed limit.
    pub fn new(distance_km: f32, speed_kmh: f32) -> Self {
        Road {
            distance_km: OrderedFloat(distance_km),
            speed_kmh: OrderedFloat(speed_kmh),
        }
    }

    /// Creates a road whose cost is exactly `cost`, driven at 1 km/h.
    pub fn with_cost(cost: f32) -> Self {
        Road::new(cost, 1.0)
    }

    /// Traversal weight of the road.
    pub fn cost(&self) -> f32 {
        self.distance_km.into_inner() / self.speed_kmh.into_inner()
    }

    /// A road is usable for routing when its length is a finite,
    /// non-negative number and its speed a finite, positive one.
    pub fn is_valid(&self) -> bool {
        let distance = self.distance_km.into_inner();
        let speed = self.speed_kmh.into_inner();
        distance.is_finite() && distance >= 0.0 && speed.is_finite() && speed > 0.0
    }
}
