#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::MAX_ESCORTS;
use crate::orbit::Perturbation;

fn invalid_field(err: OverlayError) -> String {
    match err {
        OverlayError::InvalidConfig(msg) => msg,
        other => format!("unexpected error: {other}"),
    }
}

// --- Defaults ---

#[test]
fn default_config_is_valid() {
    assert!(OverlayConfig::default().validate().is_ok());
}

#[test]
fn default_config_animates_at_overlay_z_index() {
    let config = OverlayConfig::default();
    assert_eq!(config.motion, MotionMode::Animate);
    assert_eq!(config.layer().z_index, OVERLAY_Z_INDEX);
}

// --- from_json ---

#[test]
fn empty_object_uses_defaults() {
    let config = OverlayConfig::from_json("{}").unwrap();
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn camel_case_fields_override_defaults() {
    let raw = r#"{
        "zIndex": 2,
        "motion": "still",
        "orbit": {
            "angularVelocityPrimary": 0.5,
            "escortCount": 3,
            "radiusFraction": 0.3,
            "escortAngularVelocityPerturbation": { "amplitude": 0.0 }
        }
    }"#;
    let config = OverlayConfig::from_json(raw).unwrap();
    assert_eq!(config.z_index, 2);
    assert_eq!(config.motion, MotionMode::Still);
    assert_eq!(config.orbit.angular_velocity_primary, 0.5);
    assert_eq!(config.orbit.escort_count, 3);
    assert_eq!(config.orbit.radius_fraction, 0.3);
    assert_eq!(config.orbit.escort_angular_velocity_perturbation.amplitude, 0.0);
    // Untouched nested fields keep their defaults.
    assert_eq!(config.orbit.escort_angular_velocity_perturbation.frequency, Perturbation::default().frequency);
    assert_eq!(config.orbit.vertical_squash, 0.2);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = OverlayConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, OverlayError::ConfigParse(_)));
}

#[test]
fn negative_escort_count_is_a_parse_error() {
    let err = OverlayConfig::from_json(r#"{"orbit": {"escortCount": -1}}"#).unwrap_err();
    assert!(matches!(err, OverlayError::ConfigParse(_)));
}

#[test]
fn unknown_motion_mode_is_a_parse_error() {
    let err = OverlayConfig::from_json(r#"{"motion": "sideways"}"#).unwrap_err();
    assert!(matches!(err, OverlayError::ConfigParse(_)));
}

// --- validate ---

#[test]
fn zero_radius_fraction_is_rejected() {
    let err = OverlayConfig::from_json(r#"{"orbit": {"radiusFraction": 0.0}}"#).unwrap_err();
    assert!(invalid_field(err).contains("radiusFraction"));
}

#[test]
fn fraction_above_one_is_rejected() {
    let err = OverlayConfig::from_json(r#"{"orbit": {"centerYFraction": 1.5}}"#).unwrap_err();
    assert!(invalid_field(err).contains("centerYFraction"));
}

#[test]
fn fraction_of_exactly_one_is_accepted() {
    assert!(OverlayConfig::from_json(r#"{"orbit": {"verticalSquash": 1.0}}"#).is_ok());
}

#[test]
fn negative_scale_is_rejected() {
    let mut config = OverlayConfig::default();
    config.orbit.escort_scale = -0.1;
    assert!(invalid_field(config.validate().unwrap_err()).contains("escortScale"));
}

#[test]
fn non_finite_velocity_is_rejected() {
    let mut config = OverlayConfig::default();
    config.orbit.angular_velocity_primary = f64::NAN;
    assert!(invalid_field(config.validate().unwrap_err()).contains("angularVelocityPrimary"));
}

#[test]
fn escort_ratio_of_one_is_rejected() {
    let err = OverlayConfig::from_json(r#"{"orbit": {"escortRadiusRatio": 1.0}}"#).unwrap_err();
    assert!(invalid_field(err).contains("escortRadiusRatio"));
    let err = OverlayConfig::from_json(r#"{"orbit": {"escortSquashRatio": 1.0}}"#).unwrap_err();
    assert!(invalid_field(err).contains("escortSquashRatio"));
}

#[test]
fn escort_ratio_just_below_one_is_accepted() {
    assert!(OverlayConfig::from_json(r#"{"orbit": {"escortRadiusRatio": 0.99, "escortSquashRatio": 0.99}}"#).is_ok());
}

#[test]
fn huge_escort_count_is_rejected() {
    let err = OverlayConfig::from_json(r#"{"orbit": {"escortCount": 4000000000}}"#).unwrap_err();
    assert!(invalid_field(err).contains("escortCount"));
}

#[test]
fn escort_count_at_cap_is_accepted() {
    let raw = format!(r#"{{"orbit": {{"escortCount": {MAX_ESCORTS}}}}}"#);
    assert_eq!(OverlayConfig::from_json(&raw).unwrap().orbit.escort_count, MAX_ESCORTS);
    let over = format!(r#"{{"orbit": {{"escortCount": {}}}}}"#, MAX_ESCORTS + 1);
    assert!(OverlayConfig::from_json(&over).is_err());
}

#[test]
fn oversized_attribute_falls_back_to_defaults() {
    let config = config_from_attribute(Some(r#"{"orbit": {"escortCount": 4000000000}}"#));
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn zero_escorts_is_valid() {
    assert!(OverlayConfig::from_json(r#"{"orbit": {"escortCount": 0}}"#).is_ok());
}

// --- config_from_attribute ---

#[test]
fn missing_or_blank_attribute_uses_defaults() {
    assert_eq!(config_from_attribute(None), OverlayConfig::default());
    assert_eq!(config_from_attribute(Some("   ")), OverlayConfig::default());
}

#[test]
fn valid_attribute_overrides() {
    let config = config_from_attribute(Some(r#"{"motion": "still"}"#));
    assert_eq!(config.motion, MotionMode::Still);
}

#[test]
fn invalid_attribute_falls_back_to_defaults() {
    assert_eq!(config_from_attribute(Some(r#"{"orbit": {"radiusFraction": 4}}"#)), OverlayConfig::default());
    assert_eq!(config_from_attribute(Some("[1, 2")), OverlayConfig::default());
}
