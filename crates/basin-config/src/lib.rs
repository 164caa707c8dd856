//! Basin configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults reproducing the stock scene, so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use basin_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BasinConfig, CONFIG_SCHEMA_VERSION};

use basin_common::ConfigError;
use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<BasinConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    finish(config)
}

/// Load and validate config from an explicit path, creating it if missing.
pub fn load_config_from(path: &Path) -> Result<BasinConfig, ConfigError> {
    let config = toml_loader::load_or_create(path)?;
    finish(config)
}

fn finish(config: BasinConfig) -> Result<BasinConfig, ConfigError> {
    validation::validate(&config)?;
    for warning in validation::warnings(&config) {
        tracing::warn!("{warning}");
    }
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BasinConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = BasinConfig::default();
        let json = config_to_json(&config);
        for section in [
            "window", "camera", "fog", "lighting", "water", "layout", "items", "palette",
            "rings", "bloom", "animation", "assets", "renderer", "logging",
        ] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = BasinConfig::default();
        let json = config_to_json(&config);
        let parsed: BasinConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rings[1].name, "right");
        assert_eq!(parsed.palette.colors[2], "#2277ff");
        assert_eq!(parsed.layout.count, 12);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\nradius = 0.0\n").unwrap();

        // The loader only parses; validation happens once, here.
        assert!(toml_loader::load_from_path(&path).is_ok());
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_accepts_partial_coverage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\ncount = 6\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.layout.count, 6);
    }
}
