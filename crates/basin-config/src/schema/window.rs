//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Window appearance and initial size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
    pub startup_mode: StartupMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Basin".into(),
            width: 1280,
            height: 720,
            startup_mode: StartupMode::Windowed,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Basin");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert_eq!(config.startup_mode, StartupMode::Windowed);
    }

    #[test]
    fn startup_mode_serialization() {
        let json = serde_json::to_string(&StartupMode::Fullscreen).unwrap();
        assert_eq!(json, "\"fullscreen\"");
        let deserialized: StartupMode = serde_json::from_str("\"maximized\"").unwrap();
        assert_eq!(deserialized, StartupMode::Maximized);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("startup_mode = \"fullscreen\"").unwrap();
        assert_eq!(config.startup_mode, StartupMode::Fullscreen);
        assert_eq!(config.width, 1280);
        assert_eq!(config.title, "Basin");
    }
}
