//! Frame driver configuration: per-tick increments and wheel input.

use serde::{Deserialize, Serialize};

/// Per-frame and per-wheel-event advance amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Skip every even tick, halving the effective frame rate.
    pub skip_alternate_frames: bool,
    /// Water time advance per frame.
    pub water_time_step: f32,
    /// Ring X rotation advance per frame, in radians.
    pub rotation_step: f32,
    /// Bloom clock advance per frame.
    pub bloom_time_step: f32,
    /// Multiplier applied to forward wheel deltas.
    pub wheel_scale: f32,
    /// Wheel units reported for one line of a line-based scroll.
    pub wheel_line_delta: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            skip_alternate_frames: true,
            water_time_step: 1.0 / 60.0,
            rotation_step: 0.01,
            bloom_time_step: 0.01,
            wheel_scale: 0.01,
            wheel_line_delta: 120.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_defaults() {
        let config = AnimationConfig::default();
        assert!(config.skip_alternate_frames);
        assert!((config.water_time_step - 1.0 / 60.0).abs() < f32::EPSILON);
        assert!((config.rotation_step - 0.01).abs() < f32::EPSILON);
        assert!((config.wheel_line_delta - 120.0).abs() < f32::EPSILON);
    }

    #[test]
    fn frame_skip_can_be_disabled() {
        let config: AnimationConfig = toml::from_str("skip_alternate_frames = false").unwrap();
        assert!(!config.skip_alternate_frames);
        assert!((config.wheel_scale - 0.01).abs() < f32::EPSILON);
    }
}
