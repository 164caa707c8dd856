//! Ring layout, item, and palette configuration.

use serde::{Deserialize, Serialize};

/// Circular placement of the items in every ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Items per ring; one model file per item (valid range: 1-256).
    pub count: u32,
    /// Circle radius in world units. Must be positive.
    pub radius: f32,
    /// Circle center in ring-local space.
    pub center: [f32; 3],
    /// Angular step between consecutive items, in degrees.
    /// `count * step_deg` should equal 360 for a closed ring.
    pub step_deg: f32,
    /// Local axis each item points along its tangent.
    pub reference_axis: [f32; 3],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            count: 12,
            radius: 10.0,
            center: [0.0, 0.0, 0.0],
            step_deg: 30.0,
            reference_axis: [0.0, 0.0, -1.0],
        }
    }
}

impl LayoutConfig {
    /// Total sweep covered by `count` steps, in degrees.
    pub fn sweep_deg(&self) -> f32 {
        self.count as f32 * self.step_deg
    }
}

/// Per-item model appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemsConfig {
    /// Uniform model scale (valid range: 0.01-100.0).
    pub scale: f32,
    /// Emissive multiplier on the palette color (valid range: 0.0-10.0).
    pub emissive_intensity: f32,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            emissive_intensity: 1.0,
        }
    }
}

/// Item colors, assigned by model index modulo the palette length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: [
                "#00ff00", "#ff4422", "#2277ff", "#ff19c9", "#ff9819", "#53edce", "#fc2399",
                "#68fc23", "#9723fc", "#fc6023", "#7623eb", "#4f72ff",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults_cover_full_circle() {
        let config = LayoutConfig::default();
        assert_eq!(config.count, 12);
        assert!((config.sweep_deg() - 360.0).abs() < 1e-4);
        assert_eq!(config.reference_axis, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn palette_has_twelve_colors() {
        let palette = PaletteConfig::default();
        assert_eq!(palette.colors.len(), 12);
        assert_eq!(palette.colors[0], "#00ff00");
        assert_eq!(palette.colors[11], "#4f72ff");
    }

    #[test]
    fn palette_replaced_from_toml() {
        let palette: PaletteConfig = toml::from_str(r##"colors = ["#ffffff"]"##).unwrap();
        assert_eq!(palette.colors, vec!["#ffffff".to_string()]);
    }

    #[test]
    fn items_defaults() {
        let items = ItemsConfig::default();
        assert!((items.scale - 2.0).abs() < f32::EPSILON);
        assert!((items.emissive_intensity - 1.0).abs() < f32::EPSILON);
    }
}
