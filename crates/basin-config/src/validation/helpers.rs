//! Shared range-validation helpers used by all domain validators.

use basin_common::Color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not finite (float).
pub(crate) fn validate_range_f32(
    errors: &mut Vec<String>,
    name: &str,
    value: f32,
    min: f32,
    max: f32,
) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is finite and strictly positive.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f32) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be positive"));
    }
}

/// Push an error if `value` does not parse as a `#rrggbb` color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = \"{value}\" is not a valid hex color"));
    }
}

/// Push an error if any component is non-finite.
pub(crate) fn validate_finite_vec(errors: &mut Vec<String>, name: &str, value: [f32; 3]) {
    if value.iter().any(|c| !c.is_finite()) {
        errors.push(format!("{name} = {value:?} has a non-finite component"));
    }
}

/// Push an error if the vector is zero-length or non-finite.
pub(crate) fn validate_direction(errors: &mut Vec<String>, name: &str, value: [f32; 3]) {
    let len_sq: f32 = value.iter().map(|c| c * c).sum();
    if !len_sq.is_finite() || len_sq <= f32::EPSILON {
        errors.push(format!("{name} = {value:?} must be a non-zero direction"));
    }
}
