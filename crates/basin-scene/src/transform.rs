//! Translation, Euler rotation, and scale composed into model matrices.

use glam::{Mat4, Quat, Vec3};

/// Rotation applied as X, then Y, then Z about the parent frame's axes
/// (`R = Rx * Ry * Rz`).
pub fn euler_xyz(angles: Vec3) -> Quat {
    Quat::from_rotation_x(angles.x) * Quat::from_rotation_y(angles.y) * Quat::from_rotation_z(angles.z)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Transform from a translation and Euler angles given in degrees.
    pub fn from_degrees(translation: [f32; 3], rotation_deg: [f32; 3]) -> Self {
        let [x, y, z] = rotation_deg;
        Self {
            translation: Vec3::from_array(translation),
            rotation: Vec3::new(x.to_radians(), y.to_radians(), z.to_radians()),
            scale: Vec3::ONE,
        }
    }

    pub fn orientation(&self) -> Quat {
        euler_xyz(self.rotation)
    }

    /// `T * R * S`.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn identity_by_default() {
        assert!(Transform::default().matrix().abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn x_applies_last() {
        // Rz(90) takes +Y to -X, then Rx(-90) leaves -X alone.
        let t = Transform::from_degrees([0.0; 3], [-90.0, 0.0, 90.0]);
        let axis = t.matrix().transform_vector3(Vec3::Y);
        assert!(axis.abs_diff_eq(Vec3::NEG_X, EPS));
    }

    #[test]
    fn mirrored_ring_maps_plane_normal_identically() {
        let left = Transform::from_degrees([-3.0, 0.0, 0.0], [-90.0, 0.0, 90.0]);
        let right = Transform::from_degrees([3.0, 0.0, 0.0], [90.0, 0.0, 90.0]);
        let l = left.matrix().transform_vector3(Vec3::Y);
        let r = right.matrix().transform_vector3(Vec3::Y);
        assert!(l.abs_diff_eq(r, EPS));
        // The in-plane axes are flipped between the two rings.
        let lz = left.matrix().transform_vector3(Vec3::Z);
        let rz = right.matrix().transform_vector3(Vec3::Z);
        assert!(lz.abs_diff_eq(-rz, EPS));
    }

    #[test]
    fn translation_and_scale() {
        let t = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::ZERO,
            scale: Vec3::splat(2.0),
        };
        let p = t.matrix().transform_point3(Vec3::ONE);
        assert!(p.abs_diff_eq(Vec3::new(3.0, 4.0, 5.0), EPS));
    }
}
