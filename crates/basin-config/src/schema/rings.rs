//! Ring group configuration.

use serde::{Deserialize, Serialize};

/// One rotating group of items laid out on the shared circle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RingConfig {
    pub name: String,
    /// Group translation in world units.
    pub offset: [f32; 3],
    /// Initial Euler XYZ rotation in degrees.
    pub rotation_deg: [f32; 3],
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            name: "ring".into(),
            offset: [0.0, 0.0, 0.0],
            rotation_deg: [0.0, 0.0, 0.0],
        }
    }
}

/// The two mirrored rings either side of the basin.
pub fn default_rings() -> Vec<RingConfig> {
    vec![
        RingConfig {
            name: "left".into(),
            offset: [-3.0, 0.0, 0.0],
            rotation_deg: [-90.0, 0.0, 90.0],
        },
        RingConfig {
            name: "right".into(),
            offset: [3.0, 0.0, 0.0],
            rotation_deg: [90.0, 0.0, 90.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rings_are_mirrored() {
        let rings = default_rings();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].name, "left");
        assert_eq!(rings[1].name, "right");
        assert_eq!(rings[0].offset[0], -rings[1].offset[0]);
        assert_eq!(rings[0].rotation_deg[0], -rings[1].rotation_deg[0]);
    }

    #[test]
    fn ring_partial_toml() {
        let ring: RingConfig = toml::from_str("name = \"solo\"").unwrap();
        assert_eq!(ring.name, "solo");
        assert_eq!(ring.offset, [0.0, 0.0, 0.0]);
    }
}
