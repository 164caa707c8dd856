//! Frame driver: per-tick scene advance, bloom oscillation, wheel input.
//!
//! Each display refresh calls [`FrameDriver::tick`]. With alternate-frame
//! skipping on, even ticks do nothing at all, so across `K` ticks exactly
//! `ceil(K / 2)` advance the scene. Wheel input is handled by
//! [`FrameDriver::on_wheel`], which the event loop wires up once.

use std::f32::consts::TAU;

use basin_config::schema::{AnimationConfig, BloomConfig};
use rand::Rng;

use crate::graph::Scene;

/// Bloom strength as a sine wave scaled by a fresh random factor:
/// `base + amplitude * sin(2π * frequency * t) * random * random_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomOscillator {
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub random_scale: f32,
}

impl BloomOscillator {
    pub fn from_config(config: &BloomConfig) -> Self {
        Self {
            base: config.base_strength,
            amplitude: config.amplitude,
            frequency: config.frequency,
            random_scale: config.random_scale,
        }
    }

    /// Strength at bloom clock `t` for a `random` sample in `[0, 1)`.
    pub fn strength(&self, t: f32, random: f32) -> f32 {
        let jitter = random.clamp(0.0, 1.0) * self.random_scale.clamp(0.0, 1.0);
        self.base + self.amplitude * (TAU * self.frequency * t).sin() * jitter
    }

    /// Inclusive range every strength falls within.
    pub fn bounds(&self) -> (f32, f32) {
        let reach = self.amplitude.abs();
        (self.base - reach, self.base + reach)
    }
}

/// Outcome of one display refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameTick {
    /// Throttled: nothing advanced, nothing should be drawn.
    Skipped,
    /// The scene moved; draw it with this bloom strength.
    Advanced { bloom_strength: f32 },
}

impl FrameTick {
    pub fn is_advanced(&self) -> bool {
        matches!(self, FrameTick::Advanced { .. })
    }
}

#[derive(Debug, Clone)]
pub struct FrameDriver {
    frame: u64,
    advanced: u64,
    bloom_time: f32,
    bloom_strength: f32,
    skip_alternate: bool,
    water_step: f32,
    rotation_step: f32,
    bloom_step: f32,
    wheel_scale: f32,
    oscillator: BloomOscillator,
}

impl FrameDriver {
    pub fn new(animation: &AnimationConfig, bloom: &BloomConfig) -> Self {
        Self {
            frame: 0,
            advanced: 0,
            bloom_time: 0.0,
            bloom_strength: bloom.base_strength,
            skip_alternate: animation.skip_alternate_frames,
            water_step: animation.water_time_step,
            rotation_step: animation.rotation_step,
            bloom_step: animation.bloom_time_step,
            wheel_scale: animation.wheel_scale,
            oscillator: BloomOscillator::from_config(bloom),
        }
    }

    /// Handle one display refresh.
    pub fn tick<R: Rng + ?Sized>(&mut self, scene: &mut Scene, rng: &mut R) -> FrameTick {
        self.frame = self.frame.wrapping_add(1);
        if self.skip_alternate && self.frame % 2 == 0 {
            return FrameTick::Skipped;
        }

        scene.advance(self.water_step, self.rotation_step);
        self.bloom_time += self.bloom_step;
        self.bloom_strength = self.oscillator.strength(self.bloom_time, rng.gen::<f32>());
        self.advanced += 1;

        FrameTick::Advanced {
            bloom_strength: self.bloom_strength,
        }
    }

    /// Apply a wheel delta. Only turning the wheel away from the user
    /// (`delta > 0`) moves the scene; returns whether anything changed.
    pub fn on_wheel(&mut self, scene: &mut Scene, delta: f32) -> bool {
        if !delta.is_finite() || delta <= 0.0 {
            return false;
        }
        let amount = delta * self.wheel_scale;
        scene.advance(amount, amount);
        true
    }

    /// Ticks seen so far, skipped ones included.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Ticks that advanced the scene.
    pub fn advanced_frames(&self) -> u64 {
        self.advanced
    }

    pub fn bloom_time(&self) -> f32 {
        self.bloom_time
    }

    /// Strength computed by the most recent advanced tick.
    pub fn bloom_strength(&self) -> f32 {
        self.bloom_strength
    }

    pub fn oscillator(&self) -> &BloomOscillator {
        &self.oscillator
    }
}
