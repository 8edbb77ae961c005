//! Fixed-wing vehicle parameters for flight-dynamics simulation.
//!
//! [`FWParameters`] starts out populated with the Techpod reference airframe.
//! Its aerodynamic table can then be overridden from a YAML document whose
//! top-level keys match the field names, e.g.
//!
//! ```yaml
//! alpha_max: 0.35
//! c_thrust: [0.0, 14.7217, 0.0]
//! ```

pub mod config;

pub use config::{
    AeroParamSource, ConfigDocument, ConfigError, ControlSurface, FWAerodynamicParameters,
    FWParameters, ParamKey,
};
