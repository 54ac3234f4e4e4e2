//! Tunables for the alternative route selector.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouterError};

/// An alternative sharing more than 80% of the best route's nodes is
/// not a meaningfully different route.
pub const DEFAULT_MIN_DIFFERENCE: f32 = 0.2;

/// Configuration for [`alternative_route_with_config`](crate::alternative_route_with_config).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeRouteConfig {
    /// Minimum fraction of the best route's nodes that a candidate must
    /// avoid. Candidates must be strictly above this value.
    pub min_difference: f32,
}

impl Default for AlternativeRouteConfig {
    fn default() -> Self {
        AlternativeRouteConfig {
            min_difference: DEFAULT_MIN_DIFFERENCE,
        }
    }
}

impl AlternativeRouteConfig {
    /// Checks that `min_difference` lies in `[0, 1)`. A value of 1 or
    /// more could never be exceeded by any candidate.
    pub fn validate(&self) -> Result<()> {
        if (0.0..1.0).contains(&self.min_difference) {
            Ok(())
        } else {
            Err(RouterError::InvalidConfig(format!(
                "min_difference must be in [0, 1), got {}",
                self.min_difference
            )))
        }
    }
}
