//! Reference airframe constants (Techpod). SI units throughout.

use std::f64::consts::PI;

// Mass (kg) and geometry (m, m²)
pub const MASS: f64 = 2.65;
pub const WING_SPAN: f64 = 2.59;
pub const WING_SURFACE: f64 = 0.47;
pub const CHORD_LENGTH: f64 = 0.18;

// Inertia (kg·m²)
pub const INERTIA_XX: f64 = 0.16632;
pub const INERTIA_XY: f64 = 0.0;
pub const INERTIA_XZ: f64 = 0.0755;
pub const INERTIA_YY: f64 = 0.3899;
pub const INERTIA_YZ: f64 = 0.0;
pub const INERTIA_ZZ: f64 = 0.5243;

// Angle of attack bounds (rad)
pub const ALPHA_MAX: f64 = 0.27;
pub const ALPHA_MIN: f64 = -0.27;

pub const C_DRAG_ALPHA: [f64; 3] = [0.1360, -0.6737, 5.4546];
pub const C_DRAG_BETA: [f64; 3] = [0.0195, 0.0, -0.3842];
pub const C_DRAG_DELTA_AIL: [f64; 3] = [0.0195, 1.4205e-4, 7.5037e-6];
pub const C_DRAG_DELTA_FLP: [f64; 3] = [0.0195, 2.7395e-4, 1.23e-5];

pub const C_SIDE_FORCE_BETA: [f64; 2] = [0.0, -0.3073];

pub const C_LIFT_ALPHA: [f64; 4] = [0.2127, 10.8060, -46.8324, 60.6017];
pub const C_LIFT_DELTA_AIL: [f64; 2] = [0.3304, 0.0048];
pub const C_LIFT_DELTA_FLP: [f64; 2] = [0.3304, 0.0073];

pub const C_ROLL_MOMENT_BETA: [f64; 2] = [0.0, -0.0154];
pub const C_ROLL_MOMENT_P: [f64; 2] = [0.0, -0.1647];
pub const C_ROLL_MOMENT_R: [f64; 2] = [0.0, 0.0117];
pub const C_ROLL_MOMENT_DELTA_AIL: [f64; 2] = [0.0, 0.0570];
pub const C_ROLL_MOMENT_DELTA_FLP: [f64; 2] = [0.0, 0.001];

pub const C_PITCH_MOMENT_ALPHA: [f64; 2] = [0.0435, -2.9690];
pub const C_PITCH_MOMENT_Q: [f64; 2] = [-0.1173, -106.1541];
pub const C_PITCH_MOMENT_DELTA_ELV: [f64; 2] = [-0.1173, -6.1308];

pub const C_YAW_MOMENT_BETA: [f64; 2] = [0.0, 0.0430];
pub const C_YAW_MOMENT_R: [f64; 2] = [0.0, -0.0827];
pub const C_YAW_MOMENT_DELTA_RUD: [f64; 2] = [0.0, 0.06];

pub const C_THRUST: [f64; 3] = [0.0, 14.7217, 0.0];

// Control surface deflection limits (rad)
pub const CONTROL_SURFACE_DEFLECTION_MIN: f64 = -20.0 * PI / 180.0;
pub const CONTROL_SURFACE_DEFLECTION_MAX: f64 = 20.0 * PI / 180.0;

// Actuator channel indices
pub const THROTTLE_CHANNEL: i32 = 5;
pub const AILERON_LEFT_CHANNEL: i32 = 4;
pub const AILERON_RIGHT_CHANNEL: i32 = 0;
pub const ELEVATOR_CHANNEL: i32 = 1;
pub const FLAP_CHANNEL: i32 = 2;
pub const RUDDER_CHANNEL: i32 = 3;
