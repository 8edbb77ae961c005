use nalgebra::{SVector, Vector2, Vector3, Vector4};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::defaults::*;
use super::loader::{read_param, read_vector, ConfigDocument, ConfigError};

/// Aerodynamic coefficient table for the lift/drag/moment model.
///
/// Each vector holds polynomial coefficients, lowest order first; its length
/// is fixed by the model term it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FWAerodynamicParameters {
    /// Upper angle of attack bound (rad).
    pub alpha_max: f64,
    /// Lower angle of attack bound (rad).
    pub alpha_min: f64,

    /// Drag vs. angle of attack.
    pub c_drag_alpha: Vector3<f64>,
    /// Drag vs. sideslip.
    pub c_drag_beta: Vector3<f64>,
    /// Drag vs. aileron deflection.
    pub c_drag_delta_ail: Vector3<f64>,
    /// Drag vs. flap deflection.
    pub c_drag_delta_flp: Vector3<f64>,

    /// Side force vs. sideslip.
    pub c_side_force_beta: Vector2<f64>,

    /// Lift vs. angle of attack (cubic).
    pub c_lift_alpha: Vector4<f64>,
    pub c_lift_delta_ail: Vector2<f64>,
    pub c_lift_delta_flp: Vector2<f64>,

    pub c_roll_moment_beta: Vector2<f64>,
    pub c_roll_moment_p: Vector2<f64>,
    pub c_roll_moment_r: Vector2<f64>,
    pub c_roll_moment_delta_ail: Vector2<f64>,
    pub c_roll_moment_delta_flp: Vector2<f64>,

    pub c_pitch_moment_alpha: Vector2<f64>,
    pub c_pitch_moment_q: Vector2<f64>,
    pub c_pitch_moment_delta_elv: Vector2<f64>,

    pub c_yaw_moment_beta: Vector2<f64>,
    pub c_yaw_moment_r: Vector2<f64>,
    pub c_yaw_moment_delta_rud: Vector2<f64>,

    /// Thrust vs. throttle.
    pub c_thrust: Vector3<f64>,
}

/// A configuration key together with the number of values it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamKey {
    pub name: &'static str,
    /// 1 for scalars, otherwise the fixed vector length.
    pub len: usize,
}

/// Source for aerodynamic parameters.
/// Either the compiled-in reference airframe (`Programmed`) or that airframe
/// overridden by a YAML file.
#[derive(Debug, Clone)]
pub enum AeroParamSource {
    Programmed,
    File(PathBuf),
}

// Generates the key table, the load pass and the entry listing. The vector
// length given here must match the field's type or the read will not compile.
macro_rules! aero_param_table {
    (
        scalars { $($scalar:ident),* $(,)? }
        vectors { $($vector:ident : $len:literal),* $(,)? }
    ) => {
        impl FWAerodynamicParameters {
            /// Every configurable key, in load order.
            pub const KEYS: &'static [ParamKey] = &[
                $(ParamKey { name: stringify!($scalar), len: 1 },)*
                $(ParamKey { name: stringify!($vector), len: $len },)*
            ];

            fn apply_entries(&mut self, document: &ConfigDocument) -> Result<usize, ConfigError> {
                let mut applied = 0;
                $(
                    if document.contains(stringify!($scalar)) {
                        read_param(document, stringify!($scalar), &mut self.$scalar)?;
                        debug!(key = stringify!($scalar), value = self.$scalar, "Overriding aerodynamic parameter");
                        applied += 1;
                    }
                )*
                $(
                    if document.contains(stringify!($vector)) {
                        read_vector::<$len>(document, stringify!($vector), &mut self.$vector)?;
                        debug!(key = stringify!($vector), value = ?self.$vector.as_slice(), "Overriding aerodynamic parameter");
                        applied += 1;
                    }
                )*
                Ok(applied)
            }

            /// Every key paired with its current values, in load order.
            pub fn entries(&self) -> Vec<(&'static str, &[f64])> {
                vec![
                    $((stringify!($scalar), std::slice::from_ref(&self.$scalar)),)*
                    $((stringify!($vector), self.$vector.as_slice()),)*
                ]
            }
        }
    };
}

aero_param_table! {
    scalars { alpha_max, alpha_min }
    vectors {
        c_drag_alpha: 3,
        c_drag_beta: 3,
        c_drag_delta_ail: 3,
        c_drag_delta_flp: 3,
        c_side_force_beta: 2,
        c_lift_alpha: 4,
        c_lift_delta_ail: 2,
        c_lift_delta_flp: 2,
        c_roll_moment_beta: 2,
        c_roll_moment_p: 2,
        c_roll_moment_r: 2,
        c_roll_moment_delta_ail: 2,
        c_roll_moment_delta_flp: 2,
        c_pitch_moment_alpha: 2,
        c_pitch_moment_q: 2,
        c_pitch_moment_delta_elv: 2,
        c_yaw_moment_beta: 2,
        c_yaw_moment_r: 2,
        c_yaw_moment_delta_rud: 2,
        c_thrust: 3,
    }
}

fn vector<const N: usize>(values: [f64; N]) -> SVector<f64, N> {
    SVector::<f64, N>::from_column_slice(&values)
}

impl Default for FWAerodynamicParameters {
    fn default() -> Self {
        Self::techpod()
    }
}

impl FWAerodynamicParameters {
    /// Creates a coefficient table from the given source.
    ///
    /// # Returns
    /// The reference table, overridden by the file's entries for `File`.
    pub fn new(source: AeroParamSource) -> Result<Self, ConfigError> {
        let mut params = Self::techpod();
        if let AeroParamSource::File(path) = source {
            params.load_yaml_file(path)?;
        }
        Ok(params)
    }

    pub fn techpod() -> Self {
        Self {
            alpha_max: ALPHA_MAX,
            alpha_min: ALPHA_MIN,
            c_drag_alpha: vector(C_DRAG_ALPHA),
            c_drag_beta: vector(C_DRAG_BETA),
            c_drag_delta_ail: vector(C_DRAG_DELTA_AIL),
            c_drag_delta_flp: vector(C_DRAG_DELTA_FLP),
            c_side_force_beta: vector(C_SIDE_FORCE_BETA),
            c_lift_alpha: vector(C_LIFT_ALPHA),
            c_lift_delta_ail: vector(C_LIFT_DELTA_AIL),
            c_lift_delta_flp: vector(C_LIFT_DELTA_FLP),
            c_roll_moment_beta: vector(C_ROLL_MOMENT_BETA),
            c_roll_moment_p: vector(C_ROLL_MOMENT_P),
            c_roll_moment_r: vector(C_ROLL_MOMENT_R),
            c_roll_moment_delta_ail: vector(C_ROLL_MOMENT_DELTA_AIL),
            c_roll_moment_delta_flp: vector(C_ROLL_MOMENT_DELTA_FLP),
            c_pitch_moment_alpha: vector(C_PITCH_MOMENT_ALPHA),
            c_pitch_moment_q: vector(C_PITCH_MOMENT_Q),
            c_pitch_moment_delta_elv: vector(C_PITCH_MOMENT_DELTA_ELV),
            c_yaw_moment_beta: vector(C_YAW_MOMENT_BETA),
            c_yaw_moment_r: vector(C_YAW_MOMENT_R),
            c_yaw_moment_delta_rud: vector(C_YAW_MOMENT_DELTA_RUD),
            c_thrust: vector(C_THRUST),
        }
    }

    pub fn key(name: &str) -> Option<ParamKey> {
        Self::KEYS.iter().copied().find(|key| key.name == name)
    }

    /// Overrides every field whose key is present in `document`.
    ///
    /// Absent keys keep their current value. The first bad entry aborts the
    /// load and `self` is left exactly as it was before the call.
    ///
    /// # Returns
    /// The number of fields that were overridden.
    pub fn load_document(&mut self, document: &ConfigDocument) -> Result<usize, ConfigError> {
        for name in document.keys() {
            if Self::key(name).is_none() {
                debug!(key = name, "Ignoring unknown aerodynamic parameter");
            }
        }

        let mut staged = *self;
        match staged.apply_entries(document) {
            Ok(applied) => {
                *self = staged;
                Ok(applied)
            }
            Err(err) => {
                warn!("Rejected aerodynamic parameters: {}", err);
                Err(err)
            }
        }
    }

    pub fn load_yaml_str(&mut self, contents: &str) -> Result<usize, ConfigError> {
        let document = ConfigDocument::from_yaml_str(contents)?;
        self.load_document(&document)
    }

    /// Loads overrides from a YAML file.
    pub fn load_yaml_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ConfigError> {
        let path = path.as_ref();
        let document = ConfigDocument::from_path(path)?;
        let applied = self.load_document(&document)?;
        info!(
            "Loaded {} aerodynamic parameters from {}",
            applied,
            path.display()
        );
        Ok(applied)
    }

    /// Writes every key in the table, in the same shape the loader reads.
    pub fn to_document(&self) -> ConfigDocument {
        let mut document = ConfigDocument::default();
        for (name, values) in self.entries() {
            match values {
                [scalar] if Self::key(name).map_or(false, |key| key.len == 1) => {
                    document.insert(name, *scalar)
                }
                _ => document.insert(name, values.to_vec()),
            }
        }
        document
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        self.to_document().to_yaml_string()
    }

    /// Checks the alpha bounds are ordered and every coefficient is finite.
    /// The load path never calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha_min.is_finite() && self.alpha_max.is_finite()) {
            return Err(ConfigError::ValidationError(
                "alpha bounds must be finite".to_string(),
            ));
        }
        if self.alpha_min > self.alpha_max {
            return Err(ConfigError::ValidationError(format!(
                "alpha_min ({}) exceeds alpha_max ({})",
                self.alpha_min, self.alpha_max
            )));
        }

        match self
            .entries()
            .into_iter()
            .find(|(_, values)| !values.iter().all(|value| value.is_finite()))
        {
            Some((name, _)) => Err(ConfigError::ValidationError(format!(
                "{name} contains a non-finite coefficient"
            ))),
            None => Ok(()),
        }
    }
}
