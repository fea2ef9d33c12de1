use super::error::SpaceError;
use crate::utils::*;
use serde::{Deserialize, Serialize};

/// Tuning of the movement resolution.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// how far the dominant axis is shortened per iteration
    pub step: Float,
    /// a resolution is flagged as teleporting if it differs from the requested
    /// displacement by more than this multiple of it on either axis
    pub teleport_threshold: Float,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig {
            step: 1.0,
            teleport_threshold: 1.5,
        }
    }
}

impl ResolveConfig {
    pub fn validate(&self) -> Result<(), SpaceError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SpaceError::InvalidConfig {
                reason: format!("step must be positive and finite, got {}", self.step),
            });
        }
        if !self.teleport_threshold.is_finite() || self.teleport_threshold < 0.0 {
            return Err(SpaceError::InvalidConfig {
                reason: format!(
                    "teleport_threshold must be non-negative and finite, got {}",
                    self.teleport_threshold
                ),
            });
        }
        Ok(())
    }
}
