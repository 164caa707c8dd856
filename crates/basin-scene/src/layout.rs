//! Circular layout calculator.
//!
//! Places items at equal angular steps on a horizontal circle and orients
//! each one so its reference axis points along the outward direction from
//! the circle's center to the item:
//!
//! ```text
//! theta_i    = i * step
//! position_i = center + radius * (cos theta_i, 0, sin theta_i)
//! tangent_i  = normalize(position_i - center)
//! rotation_i = shortest arc from reference axis to tangent_i
//! ```
//!
//! Placement is a pure function of the item index. Callers pass the index
//! they requested an asset for, so the arrangement does not depend on the
//! order in which assets finish loading.

use std::f32::consts::TAU;

use basin_config::schema::LayoutConfig;
use glam::{Quat, Vec3};

use crate::error::SceneError;

/// Local axis an item faces before placement.
pub const REFERENCE_AXIS: Vec3 = Vec3::NEG_Z;

/// Tolerance, in radians, for a sweep to count as exactly one turn.
const COVERAGE_EPSILON: f32 = 1e-4;

/// Position and orientation of one item relative to its ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Placement {
    /// Direction the item's reference axis points after rotation.
    pub fn facing(&self, reference: Vec3) -> Vec3 {
        self.orientation * reference
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularLayout {
    center: Vec3,
    radius: f32,
    step: f32,
    reference: Vec3,
}

impl CircularLayout {
    /// Layout with an explicit angular `step` in radians.
    pub fn new(center: Vec3, radius: f32, step: f32) -> Result<Self, SceneError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SceneError::InvalidStep(step));
        }
        Ok(Self {
            center,
            radius,
            step,
            reference: REFERENCE_AXIS,
        })
    }

    /// Layout whose `count` items close the circle exactly once.
    pub fn evenly_spaced(center: Vec3, radius: f32, count: usize) -> Result<Self, SceneError> {
        if count == 0 {
            return Err(SceneError::EmptyLayout);
        }
        Self::new(center, radius, TAU / count as f32)
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self, SceneError> {
        if config.count == 0 {
            return Err(SceneError::EmptyLayout);
        }
        Self::new(
            Vec3::from_array(config.center),
            config.radius,
            config.step_deg.to_radians(),
        )?
        .with_reference_axis(Vec3::from_array(config.reference_axis))
    }

    /// Replace the axis that gets rotated onto each tangent.
    pub fn with_reference_axis(mut self, axis: Vec3) -> Result<Self, SceneError> {
        self.reference = axis.try_normalize().ok_or(SceneError::ZeroReferenceAxis)?;
        Ok(self)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn reference_axis(&self) -> Vec3 {
        self.reference
    }

    /// Angle of item `index` in radians, measured from +X towards +Z.
    pub fn angle_at(&self, index: usize) -> f32 {
        index as f32 * self.step
    }

    /// Unit vector from the center towards item `index`.
    pub fn tangent_at(&self, index: usize) -> Vec3 {
        let (sin, cos) = self.angle_at(index).sin_cos();
        Vec3::new(cos, 0.0, sin)
    }

    pub fn placement(&self, index: usize) -> Placement {
        let tangent = self.tangent_at(index);
        Placement {
            position: self.center + tangent * self.radius,
            orientation: Quat::from_rotation_arc(self.reference, tangent),
        }
    }

    pub fn placements(&self, count: usize) -> Vec<Placement> {
        (0..count).map(|i| self.placement(i)).collect()
    }

    /// Total angle swept by `count` items.
    pub fn coverage(&self, count: usize) -> f32 {
        count as f32 * self.step
    }

    /// Whether `count` items close the circle exactly once.
    ///
    /// A mismatch is legal: items either leave a gap or wrap past the
    /// starting point and overlap earlier ones.
    pub fn covers_full_circle(&self, count: usize) -> bool {
        (self.coverage(count) - TAU).abs() <= COVERAGE_EPSILON
    }
}
