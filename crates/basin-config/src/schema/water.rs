//! Water basin configuration.
//!
//! The basin is a closed cylinder whose surface is shaded with a
//! scrolling normal map. Geometry and shading parameters both live here.

use serde::{Deserialize, Serialize};

/// Cylinder geometry and water surface shading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    pub enabled: bool,
    /// Cylinder radius as a fraction of `layout.radius`.
    pub radius_scale: f32,
    pub height: f32,
    /// Segments around the circumference (valid range: 3-256).
    pub radial_segments: u32,
    /// Segments along the height (valid range: 1-256).
    pub height_segments: u32,
    /// Euler XYZ rotation in degrees.
    pub rotation_deg: [f32; 3],
    /// Direction towards the sun; must be non-zero.
    pub sun_direction: [f32; 3],
    pub sun_color: String,
    pub water_color: String,
    /// Normal map distortion strength (valid range: 0.0-20.0).
    pub distortion_scale: f32,
    /// Normal map tiling factor (valid range: 0.01-100.0).
    pub size: f32,
    /// Surface opacity (valid range: 0.0-1.0).
    pub alpha: f32,
    /// Whether scene fog also tints the water.
    pub fog: bool,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius_scale: 0.9,
            height: 64.0,
            radial_segments: 32,
            height_segments: 32,
            rotation_deg: [-90.0, 0.0, 90.0],
            sun_direction: [0.70707, 0.70707, 0.0],
            sun_color: "#9ecfe6".into(),
            water_color: "#1877a3".into(),
            distortion_scale: 2.0,
            size: 1.0,
            alpha: 1.0,
            fog: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_defaults() {
        let config = WaterConfig::default();
        assert!(config.enabled);
        assert!((config.radius_scale - 0.9).abs() < f32::EPSILON);
        assert_eq!(config.radial_segments, 32);
        assert_eq!(config.rotation_deg, [-90.0, 0.0, 90.0]);
        assert_eq!(config.water_color, "#1877a3");
        assert!(config.fog);
    }

    #[test]
    fn water_partial_toml() {
        let config: WaterConfig = toml::from_str(
            r##"
water_color = "#004466"
distortion_scale = 3.5
"##,
        )
        .unwrap();
        assert_eq!(config.water_color, "#004466");
        assert!((config.distortion_scale - 3.5).abs() < f32::EPSILON);
        assert_eq!(config.sun_color, "#9ecfe6");
    }
}
