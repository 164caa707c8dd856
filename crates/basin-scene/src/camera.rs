//! Perspective camera looking down -Z.

use basin_config::schema::CameraConfig;
use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl PerspectiveCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            fov_y: config.fov_deg.to_radians(),
            aspect: 1.0,
            near: config.near,
            far: config.far,
        }
    }

    /// Recompute the aspect ratio for a new surface size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
    }

    /// Unit viewing direction.
    pub fn forward(&self) -> Vec3 {
        Vec3::NEG_Z
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }

    /// Depth of `point` along the viewing direction, i.e. `-z` in view
    /// space. Fog is measured with this rather than straight-line distance.
    pub fn view_depth(&self, point: Vec3) -> f32 {
        (point - self.position).dot(self.forward())
    }

    /// Right-handed projection with depth mapped to `[0, 1]`.
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let cam = PerspectiveCamera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 10.0, 20.0));
        assert!((cam.fov_y - 45f32.to_radians()).abs() < 1e-6);
        assert_eq!(cam.near, 1.0);
        assert_eq!(cam.far, 100.0);
    }

    #[test]
    fn view_depth_matches_view_space_z() {
        let cam = PerspectiveCamera::default();
        let point = Vec3::new(7.0, -2.0, -15.0);
        let view_z = cam.view().transform_point3(point).z;
        assert!((cam.view_depth(point) + view_z).abs() < 1e-4);
        assert!((cam.view_depth(point) - 35.0).abs() < 1e-4);
    }

    #[test]
    fn set_viewport_updates_aspect() {
        let mut cam = PerspectiveCamera::default();
        cam.set_viewport(1920, 1080);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-5);
    }

    #[test]
    fn zero_height_falls_back_to_square() {
        let mut cam = PerspectiveCamera::default();
        cam.set_viewport(800, 0);
        assert_eq!(cam.aspect, 1.0);
    }

    #[test]
    fn view_moves_camera_to_origin() {
        let cam = PerspectiveCamera::default();
        let p = cam.view().transform_point3(cam.position);
        assert!(p.abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn point_ahead_projects_to_center() {
        let mut cam = PerspectiveCamera::default();
        cam.set_viewport(1280, 720);
        let ahead = cam.position + Vec3::new(0.0, 0.0, -10.0);
        let ndc = cam.view_projection().project_point3(ahead);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn point_behind_near_plane_is_outside_depth_range() {
        let cam = PerspectiveCamera::default();
        let behind = cam.position + Vec3::new(0.0, 0.0, -0.5);
        let ndc = cam.view_projection().project_point3(behind);
        assert!(ndc.z < 0.0);
    }
}
