mod aero_coef;
mod aircraft;
mod control_surface;
pub mod defaults;
mod loader;
mod mass;

pub use aero_coef::{AeroParamSource, FWAerodynamicParameters, ParamKey};
pub use aircraft::FWParameters;
pub use control_surface::ControlSurface;
pub use loader::{read_param, read_vector, ConfigDocument, ConfigError};
pub use mass::inertia_tensor;
