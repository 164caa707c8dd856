//! Layout, item, palette, and ring validation.

use crate::schema::BasinConfig;

use super::helpers::{
    validate_color, validate_direction, validate_finite_vec, validate_positive, validate_range,
    validate_range_f32,
};

/// Tolerance, in degrees, for a layout sweep to count as a full circle.
const COVERAGE_TOLERANCE_DEG: f32 = 1e-3;

/// Validate circular layout constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &BasinConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.count", layout.count, 1, 256);
    validate_positive(errors, "layout.radius", layout.radius);
    validate_positive(errors, "layout.step_deg", layout.step_deg);
    validate_finite_vec(errors, "layout.center", layout.center);
    validate_direction(errors, "layout.reference_axis", layout.reference_axis);
}

/// Validate item appearance constraints.
pub(crate) fn validate_items(errors: &mut Vec<String>, config: &BasinConfig) {
    validate_range_f32(errors, "items.scale", config.items.scale, 0.01, 100.0);
    validate_range_f32(
        errors,
        "items.emissive_intensity",
        config.items.emissive_intensity,
        0.0,
        10.0,
    );
}

/// Validate that the palette is non-empty and every entry parses.
pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &BasinConfig) {
    if config.palette.colors.is_empty() {
        errors.push("palette.colors must contain at least one color".into());
    }
    for (i, color) in config.palette.colors.iter().enumerate() {
        validate_color(errors, &format!("palette.colors[{i}]"), color);
    }
}

/// Validate ring groups: at least one, unique names, finite transforms.
pub(crate) fn validate_rings(errors: &mut Vec<String>, config: &BasinConfig) {
    if config.rings.is_empty() {
        errors.push("rings must contain at least one ring".into());
    }
    for (i, ring) in config.rings.iter().enumerate() {
        if ring.name.trim().is_empty() {
            errors.push(format!("rings[{i}].name must not be empty"));
        }
        if config.rings[..i].iter().any(|other| other.name == ring.name) {
            errors.push(format!("rings[{i}].name \"{}\" is duplicated", ring.name));
        }
        validate_finite_vec(errors, &format!("rings[{i}].offset"), ring.offset);
        validate_finite_vec(errors, &format!("rings[{i}].rotation_deg"), ring.rotation_deg);
    }
}

/// Report a layout whose sweep is not exactly one turn.
///
/// Partial or overlapping coverage is allowed; it is surfaced as a warning
/// and never corrected.
pub(crate) fn coverage_warning(config: &BasinConfig) -> Option<String> {
    let sweep = config.layout.sweep_deg();
    if !sweep.is_finite() || (sweep - 360.0).abs() <= COVERAGE_TOLERANCE_DEG {
        return None;
    }
    let kind = if sweep < 360.0 {
        "leaves a gap"
    } else {
        "overlaps itself"
    };
    Some(format!(
        "layout.count * layout.step_deg = {sweep} degrees; the ring {kind}"
    ))
}
