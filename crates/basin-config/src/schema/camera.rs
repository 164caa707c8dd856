//! Camera and fog configuration types.

use serde::{Deserialize, Serialize};

/// Perspective camera placement and projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-120).
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 45.0,
            near: 1.0,
            far: 100.0,
            position: [0.0, 10.0, 20.0],
        }
    }
}

/// Linear distance fog applied to every lit surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    pub enabled: bool,
    /// Fog color as hex string.
    pub color: String,
    /// Distance where fog starts.
    pub near: f32,
    /// Distance where fog fully hides geometry.
    pub far: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: "#010305".into(),
            near: 5.0,
            far: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_defaults() {
        let config = CameraConfig::default();
        assert!((config.fov_deg - 45.0).abs() < f32::EPSILON);
        assert_eq!(config.position, [0.0, 10.0, 20.0]);
        assert!(config.near < config.far);
    }

    #[test]
    fn fog_defaults() {
        let config = FogConfig::default();
        assert!(config.enabled);
        assert_eq!(config.color, "#010305");
        assert!((config.far - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fog_partial_toml() {
        let config: FogConfig = toml::from_str("far = 50.0").unwrap();
        assert!((config.far - 50.0).abs() < f32::EPSILON);
        assert!((config.near - 5.0).abs() < f32::EPSILON);
    }
}
