//! Struct definitions and implementations for [`Location`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is the geographic position of a road map
/// intersection or place. Typically, this type is used in tandem with
/// the [`Node`](`super::node::Node`) type.
///
/// Float values are used to achieve a 5-decimal precision (0.00001),
/// which narrows the error margin to a meter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub latitude: OrderedFloat<f32>,
    pub longitude: OrderedFloat<f32>,
    pub altitude_meters: OrderedFloat<f32>,
}

impl Location {
    /// Creates a ground level location from plain degrees.
    pub fn new(latitude: f32, longitude: f32) -> Self {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
            altitude_meters: OrderedFloat(0.0),
        }
    }
}
