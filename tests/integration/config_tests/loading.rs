use fw_params::{AeroParamSource, ConfigDocument, ConfigError, FWAerodynamicParameters, FWParameters};
use nalgebra::{Vector2, Vector3, Vector4};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_aero_eq, assert_vehicle_defaults, fixture_path, write_temp_yaml, yaml_from_pairs,
};

#[test]
fn test_full_file_overrides_every_key() {
    let mut params = FWParameters::default();
    let applied = params
        .load_aero_params_yaml(fixture_path("full_aero.yaml"))
        .unwrap();
    assert_eq!(applied, FWAerodynamicParameters::KEYS.len());

    let aero = &params.aero_params;
    assert_eq!(aero.alpha_max, 0.35);
    assert_eq!(aero.alpha_min, -0.3);
    assert_eq!(aero.c_drag_delta_ail, Vector3::new(0.02, 1.5e-4, 8.0e-6));
    assert_eq!(aero.c_lift_alpha, Vector4::new(0.2, 10.5, -45.0, 60.0));
    assert_eq!(aero.c_pitch_moment_q, Vector2::new(-0.12, -100.0));
    assert_eq!(aero.c_thrust, Vector3::new(0.0, 15.0, 0.5));

    // Only the aerodynamic table is read from the file.
    assert_vehicle_defaults(&params);
}

#[test]
fn test_partial_file_keeps_other_fields() {
    let mut params = FWParameters::default();
    params
        .load_aero_params_yaml(fixture_path("partial_aero.yaml"))
        .unwrap();

    let mut expected = FWAerodynamicParameters::techpod();
    expected.alpha_max = 0.35;
    expected.c_lift_alpha = Vector4::new(0.25, 11.0, -47.0, 61.0);
    assert_aero_eq(&params.aero_params, &expected);
}

#[test]
fn test_partial_load_keeps_earlier_overrides() {
    let mut aero = FWAerodynamicParameters::default();
    aero.load_yaml_str("c_thrust: [1.0, 2.0, 3.0]\n").unwrap();
    aero.load_yaml_str("alpha_max: 0.35\n").unwrap();
    assert_eq!(aero.alpha_max, 0.35);
    assert_eq!(aero.c_thrust, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_alpha_max_only() {
    let mut aero = FWAerodynamicParameters::default();
    aero.load_yaml_str("alpha_max: 0.35").unwrap();
    assert_eq!(aero.alpha_max, 0.35);
    assert_eq!(aero.c_thrust, Vector3::new(0.0, 14.7217, 0.0));
}

#[test]
fn test_dimension_mismatch_from_file() {
    let mut params = FWParameters::default();
    let err = params
        .load_aero_params_yaml(fixture_path("bad_dimension.yaml"))
        .unwrap_err();
    match err {
        ConfigError::DimensionMismatch {
            ref key,
            expected,
            actual,
        } => {
            assert_eq!(key, "c_drag_alpha");
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        ref other => panic!("Unexpected error: {other}"),
    }
    assert!(err.to_string().contains("c_drag_alpha"));
    assert_eq!(params, FWParameters::default());
}

#[test]
fn test_every_vector_rejects_wrong_length() {
    for param in FWAerodynamicParameters::KEYS.iter().filter(|param| param.len > 1) {
        for len in [param.len - 1, param.len + 1] {
            let values = format!("[{}]", vec!["1.0"; len].join(", "));
            let yaml = yaml_from_pairs(&[(param.name, values.as_str())]);

            let mut aero = FWAerodynamicParameters::default();
            match aero.load_yaml_str(&yaml).unwrap_err() {
                ConfigError::DimensionMismatch {
                    key,
                    expected,
                    actual,
                } => {
                    assert_eq!(key, param.name);
                    assert_eq!(expected, param.len);
                    assert_eq!(actual, len);
                }
                other => panic!("Unexpected error for {}: {other}", param.name),
            }
            assert_eq!(aero, FWAerodynamicParameters::default());
        }
    }
}

#[test]
fn test_key_order_does_not_matter() {
    let pairs = [
        ("alpha_min", "-0.2"),
        ("c_yaw_moment_r", "[0.0, -0.09]"),
        ("c_drag_beta", "[0.01, 0.0, -0.3]"),
        ("alpha_max", "0.3"),
        ("c_lift_alpha", "[0.1, 9.0, -40.0, 55.0]"),
    ];
    let mut reversed = pairs;
    reversed.reverse();

    let mut forward_aero = FWAerodynamicParameters::default();
    forward_aero.load_yaml_str(&yaml_from_pairs(&pairs)).unwrap();
    let mut reverse_aero = FWAerodynamicParameters::default();
    reverse_aero.load_yaml_str(&yaml_from_pairs(&reversed)).unwrap();

    assert_eq!(forward_aero, reverse_aero);
}

#[test]
fn test_load_twice_is_idempotent() {
    let document = ConfigDocument::from_path(fixture_path("full_aero.yaml")).unwrap();
    let mut aero = FWAerodynamicParameters::default();
    aero.load_document(&document).unwrap();
    let once = aero;
    aero.load_document(&document).unwrap();
    assert_eq!(aero, once);
}

#[test]
fn test_dumped_table_reloads() {
    let mut source = FWAerodynamicParameters::default();
    source
        .load_yaml_file(fixture_path("full_aero.yaml"))
        .unwrap();

    let yaml = source.to_yaml_string().unwrap();
    let file = write_temp_yaml(&yaml);
    let reloaded = FWAerodynamicParameters::new(AeroParamSource::File(file.path().to_path_buf()))
        .unwrap();
    assert_aero_eq(&reloaded, &source);
}

#[test]
fn test_file_source_with_unknown_keys() {
    let file = write_temp_yaml("mass: 12.0\nchord_length: 0.5\nc_roll_moment_r: [0.0, 0.02]\n");
    let aero =
        FWAerodynamicParameters::new(AeroParamSource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(aero.c_roll_moment_r, Vector2::new(0.0, 0.02));
    assert_eq!(aero.alpha_max, 0.27);
}

#[test]
fn test_missing_file() {
    let mut params = FWParameters::default();
    let err = params
        .load_aero_params_yaml(fixture_path("does_not_exist.yaml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileError(_)));
    assert_eq!(params, FWParameters::default());
}

#[test]
fn test_type_mismatch_aborts_whole_load() {
    let mut aero = FWAerodynamicParameters::default();
    let err = aero
        .load_yaml_str("alpha_max: 0.3\nc_thrust: [0.0, lots, 0.0]\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::TypeMismatch { ref key, .. } if key == "c_thrust"));
    assert_eq!(aero.alpha_max, 0.27);
}
