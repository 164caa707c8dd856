//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = BasinConfig::default();
    assert!(validate(&config).is_ok());
    assert!(warnings(&config).is_empty());
}

#[test]
fn catches_zero_radius() {
    let mut config = BasinConfig::default();
    config.layout.radius = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.radius"));
}

#[test]
fn catches_nan_radius() {
    let mut config = BasinConfig::default();
    config.layout.radius = f32::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.radius"));
}

#[test]
fn catches_zero_count() {
    let mut config = BasinConfig::default();
    config.layout.count = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.count"));
}

#[test]
fn catches_zero_reference_axis() {
    let mut config = BasinConfig::default();
    config.layout.reference_axis = [0.0, 0.0, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.reference_axis"));
}

#[test]
fn catches_empty_palette() {
    let mut config = BasinConfig::default();
    config.palette.colors.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.colors"));
}

#[test]
fn catches_bad_palette_entry() {
    let mut config = BasinConfig::default();
    config.palette.colors[4] = "orange".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.colors[4]"));
}

#[test]
fn catches_no_rings() {
    let mut config = BasinConfig::default();
    config.rings.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("rings"));
}

#[test]
fn catches_duplicate_ring_names() {
    let mut config = BasinConfig::default();
    config.rings[1].name = "left".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicated"));
}

#[test]
fn catches_camera_far_before_near() {
    let mut config = BasinConfig::default();
    config.camera.far = 0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.far"));
}

#[test]
fn catches_fog_far_before_near() {
    let mut config = BasinConfig::default();
    config.fog.near = 40.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("fog.far"));
}

#[test]
fn catches_zero_sun_direction() {
    let mut config = BasinConfig::default();
    config.water.sun_direction = [0.0, 0.0, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("water.sun_direction"));
}

#[test]
fn catches_bad_water_color() {
    let mut config = BasinConfig::default();
    config.water.water_color = "#12".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("water.water_color"));
}

#[test]
fn catches_too_few_radial_segments() {
    let mut config = BasinConfig::default();
    config.water.radial_segments = 2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("water.radial_segments"));
}

#[test]
fn catches_bloom_random_scale_over_one() {
    let mut config = BasinConfig::default();
    config.bloom.random_scale = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bloom.random_scale"));
}

#[test]
fn catches_negative_wheel_line_delta() {
    let mut config = BasinConfig::default();
    config.animation.wheel_line_delta = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.wheel_line_delta"));
}

#[test]
fn catches_pattern_without_placeholder() {
    let mut config = BasinConfig::default();
    config.assets.model_file_pattern = "text.obj".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assets.model_file_pattern"));
}

#[test]
fn catches_window_too_small() {
    let mut config = BasinConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = BasinConfig::default();
    config.layout.radius = -1.0;
    config.bloom.threshold = 2.0;
    config.renderer.clear_color = "nope".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.radius"));
    assert!(err.contains("bloom.threshold"));
    assert!(err.contains("renderer.clear_color"));
}

#[test]
fn partial_sweep_warns_but_validates() {
    let mut config = BasinConfig::default();
    config.layout.count = 10;
    assert!(validate(&config).is_ok());
    let warnings = warnings(&config);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("gap"));
}

#[test]
fn overlapping_sweep_warns() {
    let mut config = BasinConfig::default();
    config.layout.step_deg = 45.0;
    let warnings = warnings(&config);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("overlaps"));
}

#[test]
fn evenly_divided_circle_does_not_warn() {
    let mut config = BasinConfig::default();
    config.layout.count = 8;
    config.layout.step_deg = 45.0;
    assert!(warnings(&config).is_empty());
}
