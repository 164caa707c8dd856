//! Water surface uniforms.

use basin_scene::Water;

/// Matches the WGSL `WaterUniforms` struct at group 1, binding 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaterUniforms {
    pub model: [[f32; 4]; 4],
    /// Linear water color; `w` is the surface alpha.
    pub water_color: [f32; 4],
    /// Linear sun color; `w` is the distortion scale.
    pub sun_color: [f32; 4],
    /// Unit vector towards the sun; `w` is the normal map tiling size.
    pub sun_direction: [f32; 4],
    /// Scroll time, fog flag (1.0 = fogged), unused, unused.
    pub params: [f32; 4],
}

impl WaterUniforms {
    pub fn from_water(water: &Water) -> Self {
        let p = &water.params;
        let [wr, wg, wb] = p.water_color.to_linear();
        let [sr, sg, sb] = p.sun_color.to_linear();
        let dir = p.sun_direction;
        Self {
            model: water.model_matrix().to_cols_array_2d(),
            water_color: [wr, wg, wb, p.alpha],
            sun_color: [sr, sg, sb, p.distortion_scale],
            sun_direction: [dir.x, dir.y, dir.z, p.size],
            params: [water.time, if p.fog { 1.0 } else { 0.0 }, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basin_config::BasinConfig;
    use basin_scene::Scene;

    #[test]
    fn water_uniforms_size_is_128_bytes() {
        assert_eq!(std::mem::size_of::<WaterUniforms>(), 128);
    }

    #[test]
    fn from_water_packs_params() {
        let scene = Scene::from_config(&BasinConfig::default()).unwrap();
        let u = WaterUniforms::from_water(&scene.water);
        assert_eq!(u.water_color[3], 1.0);
        assert_eq!(u.sun_color[3], 2.0);
        assert_eq!(u.sun_direction[3], 1.0);
        assert_eq!(u.params, [0.0, 1.0, 0.0, 0.0]);
        let len = (u.sun_direction[0].powi(2) + u.sun_direction[1].powi(2)).sqrt();
        assert!((len - 1.0).abs() < 1e-4);
    }

    #[test]
    fn time_follows_scene_advance() {
        let mut scene = Scene::from_config(&BasinConfig::default()).unwrap();
        scene.advance(0.5, 0.0);
        let u = WaterUniforms::from_water(&scene.water);
        assert!((u.params[0] - 0.5).abs() < 1e-6);
    }
}
