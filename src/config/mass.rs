use nalgebra::Matrix3;

use super::defaults::{
    INERTIA_XX, INERTIA_XY, INERTIA_XZ, INERTIA_YY, INERTIA_YZ, INERTIA_ZZ,
};

/// Builds the symmetric body inertia tensor from its six independent entries.
///
/// # Arguments
/// * `ixx`, `iyy`, `izz` - Moments of inertia about the body axes (kg·m²).
/// * `ixy`, `ixz`, `iyz` - Products of inertia (kg·m²).
pub fn inertia_tensor(ixx: f64, ixy: f64, ixz: f64, iyy: f64, iyz: f64, izz: f64) -> Matrix3<f64> {
    Matrix3::new(
        ixx, ixy, ixz, //
        ixy, iyy, iyz, //
        ixz, iyz, izz,
    )
}

pub fn techpod_inertia() -> Matrix3<f64> {
    inertia_tensor(
        INERTIA_XX, INERTIA_XY, INERTIA_XZ, INERTIA_YY, INERTIA_YZ, INERTIA_ZZ,
    )
}
