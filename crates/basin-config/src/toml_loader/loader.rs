//! Core TOML config loading: read from path or platform default.

use crate::schema::BasinConfig;
use basin_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields. This
/// only parses; [`crate::load_config_from`] and [`crate::load_config`]
/// validate the result.
pub fn load_from_path(path: &Path) -> Result<BasinConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: BasinConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the commented default file first if
/// nothing exists there yet.
pub fn load_or_create(path: &Path) -> Result<BasinConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(BasinConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/basin/config.toml`
/// On Linux: `~/.config/basin/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<BasinConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}
