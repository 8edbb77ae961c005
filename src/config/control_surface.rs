use serde::{Deserialize, Serialize};

use super::defaults::{CONTROL_SURFACE_DEFLECTION_MAX, CONTROL_SURFACE_DEFLECTION_MIN};
use super::loader::ConfigError;

/// An actuated aerodynamic surface (aileron, elevator, flap or rudder).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSurface {
    /// Index into the actuator command channel array.
    pub channel: i32,
    /// Minimum deflection (rad).
    pub deflection_min: f64,
    /// Maximum deflection (rad).
    pub deflection_max: f64,
}

impl ControlSurface {
    /// Creates a surface on `channel` with the reference ±20° deflection limits.
    pub fn new(channel: i32) -> Self {
        Self::with_limits(
            channel,
            CONTROL_SURFACE_DEFLECTION_MIN,
            CONTROL_SURFACE_DEFLECTION_MAX,
        )
    }

    pub fn with_limits(channel: i32, deflection_min: f64, deflection_max: f64) -> Self {
        debug_assert!(
            deflection_min <= deflection_max,
            "deflection_min must not exceed deflection_max"
        );
        Self {
            channel,
            deflection_min,
            deflection_max,
        }
    }

    /// Clamps a commanded deflection to this surface's limits.
    pub fn clamp(&self, deflection: f64) -> f64 {
        deflection.clamp(self.deflection_min, self.deflection_max)
    }

    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.deflection_min.is_finite() && self.deflection_max.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "{name}: deflection limits must be finite"
            )));
        }
        if self.deflection_min > self.deflection_max {
            return Err(ConfigError::ValidationError(format!(
                "{name}: deflection_min ({}) exceeds deflection_max ({})",
                self.deflection_min, self.deflection_max
            )));
        }
        if self.channel < 0 {
            return Err(ConfigError::ValidationError(format!(
                "{name}: channel must be non-negative, got {}",
                self.channel
            )));
        }
        Ok(())
    }
}
