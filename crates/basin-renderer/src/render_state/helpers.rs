use basin_common::Color;

use crate::gpu::{create_render_target, PhysicalSize, DEPTH_FORMAT, HDR_FORMAT};

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Clear value for the linear HDR scene target.
pub(crate) fn linear_clear_color(color: Color) -> wgpu::Color {
    let [r, g, b] = color.to_linear();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    }
}

/// Offscreen HDR color and depth targets of the scene pass.
pub(crate) struct SceneTargets {
    pub color_texture: wgpu::Texture,
    pub color_view: wgpu::TextureView,
    pub depth_texture: wgpu::Texture,
    pub depth_view: wgpu::TextureView,
}

impl SceneTargets {
    pub fn new(device: &wgpu::Device, size: PhysicalSize) -> Self {
        let (color_texture, color_view) =
            create_render_target(device, size, HDR_FORMAT, "scene hdr target");
        let (depth_texture, depth_view) =
            create_render_target(device, size, DEPTH_FORMAT, "scene depth target");
        Self {
            color_texture,
            color_view,
            depth_texture,
            depth_view,
        }
    }

    pub fn matches(&self, size: PhysicalSize) -> bool {
        self.color_texture.width() == size.width
            && self.color_texture.height() == size.height
            && self.depth_texture.width() == size.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_is_linearized() {
        let c = linear_clear_color(Color::from_rgba(255, 255, 255, 255));
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 1.0, 1.0, 1.0));

        let dark = linear_clear_color(Color::from_hex("#010305").unwrap());
        assert!(dark.b < 5.0 / 255.0);
        assert!(dark.b > 0.0);
    }
}
