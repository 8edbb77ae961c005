use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::aero_coef::FWAerodynamicParameters;
use super::control_surface::ControlSurface;
use super::defaults::*;
use super::loader::ConfigError;
use super::mass::techpod_inertia;

/// The full fixed-wing vehicle description: mass, geometry, inertia, actuator
/// layout and the aerodynamic coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FWParameters {
    /// Total mass (kg).
    pub mass: f64,
    /// Wing span (m).
    pub wing_span: f64,
    /// Wing surface area (m²).
    pub wing_surface: f64,
    /// Mean chord length (m).
    pub chord_length: f64,

    /// Symmetric body inertia tensor (kg·m²).
    pub inertia: Matrix3<f64>,

    pub throttle_channel: i32,

    pub aileron_left: ControlSurface,
    pub aileron_right: ControlSurface,
    pub elevator: ControlSurface,
    pub flap: ControlSurface,
    pub rudder: ControlSurface,

    pub aero_params: FWAerodynamicParameters,
}

impl Default for FWParameters {
    /// The Techpod airframe is the reference vehicle.
    fn default() -> Self {
        Self::techpod()
    }
}

impl FWParameters {
    pub fn techpod() -> Self {
        Self {
            mass: MASS,
            wing_span: WING_SPAN,
            wing_surface: WING_SURFACE,
            chord_length: CHORD_LENGTH,
            inertia: techpod_inertia(),
            throttle_channel: THROTTLE_CHANNEL,
            aileron_left: ControlSurface::new(AILERON_LEFT_CHANNEL),
            aileron_right: ControlSurface::new(AILERON_RIGHT_CHANNEL),
            elevator: ControlSurface::new(ELEVATOR_CHANNEL),
            flap: ControlSurface::new(FLAP_CHANNEL),
            rudder: ControlSurface::new(RUDDER_CHANNEL),
            aero_params: FWAerodynamicParameters::techpod(),
        }
    }

    /// Overrides the aerodynamic coefficient table from a YAML file.
    ///
    /// Mass, geometry, inertia and control surfaces are not read from the
    /// file and keep their current values.
    pub fn load_aero_params_yaml<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ConfigError> {
        self.aero_params.load_yaml_file(path)
    }

    pub fn control_surfaces(&self) -> [(&'static str, &ControlSurface); 5] {
        [
            ("aileron_left", &self.aileron_left),
            ("aileron_right", &self.aileron_right),
            ("elevator", &self.elevator),
            ("flap", &self.flap),
            ("rudder", &self.rudder),
        ]
    }

    /// Checks the whole vehicle description for physical consistency.
    /// Loading never calls this; hosts opt in before starting a simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("mass", self.mass),
            ("wing_span", self.wing_span),
            ("wing_surface", self.wing_surface),
            ("chord_length", self.chord_length),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.inertia != self.inertia.transpose() {
            return Err(ConfigError::ValidationError(
                "inertia tensor must be symmetric".to_string(),
            ));
        }
        if self.inertia.try_inverse().is_none() {
            return Err(ConfigError::ValidationError(
                "inertia tensor must be invertible".to_string(),
            ));
        }

        if self.throttle_channel < 0 {
            return Err(ConfigError::ValidationError(format!(
                "throttle_channel must be non-negative, got {}",
                self.throttle_channel
            )));
        }
        for (name, surface) in self.control_surfaces() {
            surface.validate(name)?;
        }

        self.aero_params.validate()
    }
}
