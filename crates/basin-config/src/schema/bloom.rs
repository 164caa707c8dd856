//! Bloom post-processing configuration.
//!
//! Strength is not fixed: every advanced frame it is recomputed as
//! `base_strength + amplitude * sin(2π * frequency * t) * random * random_scale`.

use serde::{Deserialize, Serialize};

/// Bloom pass and strength oscillation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    pub enabled: bool,
    /// Luminance cutoff for the bright pass (valid range: 0.0-1.0).
    pub threshold: f32,
    /// Blur spread (valid range: 0.0-1.0).
    pub radius: f32,
    /// Center of the oscillation (valid range: 0.0-3.0).
    pub base_strength: f32,
    /// Peak deviation from `base_strength` (valid range: 0.0-3.0).
    pub amplitude: f32,
    /// Oscillation frequency in cycles per bloom-clock unit.
    pub frequency: f32,
    /// Upper bound of the per-frame random factor (valid range: 0.0-1.0).
    pub random_scale: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.01,
            radius: 0.2,
            base_strength: 1.0,
            amplitude: 0.5,
            frequency: 0.5,
            random_scale: 0.75,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloom_defaults() {
        let config = BloomConfig::default();
        assert!(config.enabled);
        assert!((config.threshold - 0.01).abs() < f32::EPSILON);
        assert!((config.radius - 0.2).abs() < f32::EPSILON);
        assert!((config.base_strength - 1.0).abs() < f32::EPSILON);
        assert!((config.amplitude - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_disabled_from_toml() {
        let config: BloomConfig = toml::from_str("enabled = false").unwrap();
        assert!(!config.enabled);
        assert!((config.random_scale - 0.75).abs() < f32::EPSILON);
    }
}
