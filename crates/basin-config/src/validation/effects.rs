//! Bloom and animation validation.

use crate::schema::BasinConfig;

use super::helpers::{validate_positive, validate_range_f32};

/// Validate bloom pass and oscillation parameters.
pub(crate) fn validate_bloom(errors: &mut Vec<String>, config: &BasinConfig) {
    let bloom = &config.bloom;
    validate_range_f32(errors, "bloom.threshold", bloom.threshold, 0.0, 1.0);
    validate_range_f32(errors, "bloom.radius", bloom.radius, 0.0, 1.0);
    validate_range_f32(errors, "bloom.base_strength", bloom.base_strength, 0.0, 3.0);
    validate_range_f32(errors, "bloom.amplitude", bloom.amplitude, 0.0, 3.0);
    validate_range_f32(errors, "bloom.frequency", bloom.frequency, 0.0, 100.0);
    validate_range_f32(errors, "bloom.random_scale", bloom.random_scale, 0.0, 1.0);
}

/// Validate per-frame and wheel increments.
pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &BasinConfig) {
    let anim = &config.animation;
    validate_range_f32(errors, "animation.water_time_step", anim.water_time_step, 0.0, 1.0);
    validate_range_f32(errors, "animation.rotation_step", anim.rotation_step, -1.0, 1.0);
    validate_range_f32(errors, "animation.bloom_time_step", anim.bloom_time_step, 0.0, 1.0);
    validate_range_f32(errors, "animation.wheel_scale", anim.wheel_scale, 0.0, 1.0);
    validate_positive(errors, "animation.wheel_line_delta", anim.wheel_line_delta);
}
