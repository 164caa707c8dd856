//! Camera, fog, lighting, and water validation.

use crate::schema::BasinConfig;

use super::helpers::{
    validate_color, validate_direction, validate_finite_vec, validate_positive, validate_range,
    validate_range_f32,
};

/// Validate camera projection constraints.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &BasinConfig) {
    let camera = &config.camera;
    validate_range_f32(errors, "camera.fov_deg", camera.fov_deg, 10.0, 120.0);
    validate_positive(errors, "camera.near", camera.near);
    if camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
    validate_finite_vec(errors, "camera.position", camera.position);
}

/// Validate fog distances and color.
pub(crate) fn validate_fog(errors: &mut Vec<String>, config: &BasinConfig) {
    let fog = &config.fog;
    validate_color(errors, "fog.color", &fog.color);
    validate_range_f32(errors, "fog.near", fog.near, 0.0, f32::MAX);
    if fog.far <= fog.near {
        errors.push(format!(
            "fog.far = {} must be greater than fog.near = {}",
            fog.far, fog.near
        ));
    }
}

/// Validate light colors and intensities.
pub(crate) fn validate_lighting(errors: &mut Vec<String>, config: &BasinConfig) {
    let lighting = &config.lighting;
    validate_color(errors, "lighting.ambient_color", &lighting.ambient_color);
    validate_color(
        errors,
        "lighting.directional_color",
        &lighting.directional_color,
    );
    validate_range_f32(
        errors,
        "lighting.ambient_intensity",
        lighting.ambient_intensity,
        0.0,
        4.0,
    );
    validate_range_f32(
        errors,
        "lighting.directional_intensity",
        lighting.directional_intensity,
        0.0,
        4.0,
    );
    validate_direction(
        errors,
        "lighting.directional_position",
        lighting.directional_position,
    );
}

/// Validate water geometry and shading parameters.
pub(crate) fn validate_water(errors: &mut Vec<String>, config: &BasinConfig) {
    let water = &config.water;
    validate_positive(errors, "water.radius_scale", water.radius_scale);
    validate_positive(errors, "water.height", water.height);
    validate_range(errors, "water.radial_segments", water.radial_segments, 3, 256);
    validate_range(errors, "water.height_segments", water.height_segments, 1, 256);
    validate_finite_vec(errors, "water.rotation_deg", water.rotation_deg);
    validate_direction(errors, "water.sun_direction", water.sun_direction);
    validate_color(errors, "water.sun_color", &water.sun_color);
    validate_color(errors, "water.water_color", &water.water_color);
    validate_range_f32(
        errors,
        "water.distortion_scale",
        water.distortion_scale,
        0.0,
        20.0,
    );
    validate_range_f32(errors, "water.size", water.size, 0.01, 100.0);
    validate_range_f32(errors, "water.alpha", water.alpha, 0.0, 1.0);
}
