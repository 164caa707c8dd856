//! Validation for smaller config sections: window, assets, and renderer.

use crate::schema::{BasinConfig, MODEL_INDEX_PLACEHOLDER};

use super::helpers::{validate_color, validate_range};

/// Validate window size constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &BasinConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
}

/// Validate asset path settings.
pub(crate) fn validate_assets(errors: &mut Vec<String>, config: &BasinConfig) {
    let assets = &config.assets;
    if !assets.model_file_pattern.contains(MODEL_INDEX_PLACEHOLDER) {
        errors.push(format!(
            "assets.model_file_pattern = \"{}\" must contain {MODEL_INDEX_PLACEHOLDER}",
            assets.model_file_pattern
        ));
    }
    if assets.water_normals.trim().is_empty() {
        errors.push("assets.water_normals must not be empty".into());
    }
}

/// Validate renderer settings.
pub(crate) fn validate_renderer(errors: &mut Vec<String>, config: &BasinConfig) {
    validate_color(errors, "renderer.clear_color", &config.renderer.clear_color);
}
