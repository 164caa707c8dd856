//! Scene lighting configuration.

use serde::{Deserialize, Serialize};

/// One ambient term plus a single directional light aimed at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_color: String,
    /// Ambient intensity (valid range: 0.0-4.0).
    pub ambient_intensity: f32,
    pub directional_color: String,
    /// Directional intensity (valid range: 0.0-4.0).
    pub directional_intensity: f32,
    /// Light position; the light always points at the origin.
    pub directional_position: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: "#ffffff".into(),
            ambient_intensity: 1.0,
            directional_color: "#ffffff".into(),
            directional_intensity: 1.0,
            directional_position: [0.0, 0.0, 100.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighting_defaults() {
        let config = LightingConfig::default();
        assert_eq!(config.ambient_color, "#ffffff");
        assert_eq!(config.directional_position, [0.0, 0.0, 100.0]);
        assert!((config.directional_intensity - 1.0).abs() < f32::EPSILON);
    }
}
