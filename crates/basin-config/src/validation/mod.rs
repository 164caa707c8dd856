//! Full configuration validation.
//!
//! Validates numeric ranges, colors, directions, and ring definitions.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod effects;
mod helpers;
mod layout;
mod misc;
mod scene;

#[cfg(test)]
mod tests;

use crate::schema::BasinConfig;
use basin_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BasinConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_window(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    scene::validate_fog(&mut errors, config);
    scene::validate_lighting(&mut errors, config);
    scene::validate_water(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    layout::validate_items(&mut errors, config);
    layout::validate_palette(&mut errors, config);
    layout::validate_rings(&mut errors, config);
    effects::validate_bloom(&mut errors, config);
    effects::validate_animation(&mut errors, config);
    misc::validate_assets(&mut errors, config);
    misc::validate_renderer(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Non-fatal findings: settings that are legal but probably unintended.
pub fn warnings(config: &BasinConfig) -> Vec<String> {
    layout::coverage_warning(config).into_iter().collect()
}
