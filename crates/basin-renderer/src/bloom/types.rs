//! Bloom pipeline types.

use basin_config::schema::BloomConfig;

/// Per-pass uniforms for the bloom shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BloomUniforms {
    /// 1.0 / texture_width, 1.0 / texture_height.
    pub texel_size: [f32; 2],
    /// Luminance cutoff of the bright pass.
    pub threshold: f32,
    /// Blur spread in 0..1.
    pub radius: f32,
}

/// Bloom configuration fixed at pipeline creation. The strength changes
/// every frame and is fed to the composite pass instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    pub enabled: bool,
    pub threshold: f32,
    pub radius: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self::from_config(&BloomConfig::default())
    }
}

impl BloomSettings {
    pub fn from_config(config: &BloomConfig) -> Self {
        Self {
            enabled: config.enabled,
            threshold: config.threshold.clamp(0.0, 1.0),
            radius: config.radius.clamp(0.0, 1.0),
        }
    }

    /// Texel offset multiplier between blur taps.
    pub fn spread(&self) -> f32 {
        1.0 + self.radius * 4.0
    }

    /// Strength to composite with; zero when bloom is off.
    pub fn effective_strength(&self, strength: f32) -> f32 {
        if self.enabled {
            strength.max(0.0)
        } else {
            0.0
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
