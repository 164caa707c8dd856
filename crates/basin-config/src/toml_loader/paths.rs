//! Where the config file lives, and writing the commented template there.

use basin_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "basin";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/basin/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

fn io_failure(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("{action} {}: {err}", path.display()))
}

/// Write the documented default config to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_failure("cannot create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_failure("cannot write", path, e))?;
    info!("Wrote default config to {}", path.display());
    Ok(())
}
