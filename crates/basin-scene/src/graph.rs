//! Scene graph: camera, fog, lights, the water basin, and the item rings.
//!
//! [`Scene`] is the single context object handed to initialization, the
//! frame driver, and the renderer. Items are attached by explicit model
//! index as their meshes arrive; each ring keeps its items sorted by index
//! so the arrangement is independent of load completion order.

use basin_common::Color;
use basin_config::schema::{BasinConfig, FogConfig, LightingConfig, RingConfig, WaterConfig};
use glam::{Mat4, Vec3};
use tracing::{debug, warn};

use crate::camera::PerspectiveCamera;
use crate::error::SceneError;
use crate::layout::{CircularLayout, Placement};
use crate::transform::Transform;

fn parse_color(field: &str, value: &str) -> Result<Color, SceneError> {
    Color::from_hex(value).ok_or_else(|| SceneError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Distance fog between `near` and `far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub enabled: bool,
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    fn from_config(config: &FogConfig) -> Result<Self, SceneError> {
        Ok(Self {
            enabled: config.enabled,
            color: parse_color("fog.color", &config.color)?,
            near: config.near,
            far: config.far,
        })
    }

    /// Fog blend factor at view-space `depth`: a smoothstep from 0 at `near`
    /// to 1 at `far`, the same curve the shaders use.
    pub fn factor(&self, depth: f32) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        let t = ((depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }
}

/// Ambient term plus one directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    /// Linear ambient radiance (color times intensity).
    pub ambient: [f32; 3],
    /// Linear directional radiance (color times intensity).
    pub directional: [f32; 3],
    /// Unit vector pointing from the scene towards the light.
    pub direction: Vec3,
}

impl Lighting {
    fn from_config(config: &LightingConfig) -> Result<Self, SceneError> {
        let ambient = parse_color("lighting.ambient_color", &config.ambient_color)?;
        let directional = parse_color("lighting.directional_color", &config.directional_color)?;
        let scale = |c: Color, k: f32| c.to_linear().map(|v| v * k);
        Ok(Self {
            ambient: scale(ambient, config.ambient_intensity),
            directional: scale(directional, config.directional_intensity),
            // The light sits at `directional_position` aiming at the origin.
            direction: Vec3::from_array(config.directional_position)
                .try_normalize()
                .unwrap_or(Vec3::Z),
        })
    }
}

/// Shading parameters of the water surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterParams {
    pub sun_direction: Vec3,
    pub sun_color: Color,
    pub water_color: Color,
    pub distortion_scale: f32,
    pub size: f32,
    pub alpha: f32,
    pub fog: bool,
}

/// The cylindrical basin of water in the middle of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Water {
    pub enabled: bool,
    pub transform: Transform,
    pub radius: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    pub params: WaterParams,
    /// Drives the normal map scroll.
    pub time: f32,
}

impl Water {
    fn from_config(
        config: &WaterConfig,
        center: Vec3,
        layout_radius: f32,
    ) -> Result<Self, SceneError> {
        Ok(Self {
            enabled: config.enabled,
            transform: Transform::from_degrees(center.to_array(), config.rotation_deg),
            radius: layout_radius * config.radius_scale,
            height: config.height,
            radial_segments: config.radial_segments,
            height_segments: config.height_segments,
            params: WaterParams {
                sun_direction: Vec3::from_array(config.sun_direction)
                    .try_normalize()
                    .unwrap_or(Vec3::new(0.70707, 0.70707, 0.0)),
                sun_color: parse_color("water.sun_color", &config.sun_color)?,
                water_color: parse_color("water.water_color", &config.water_color)?,
                distortion_scale: config.distortion_scale,
                size: config.size,
                alpha: config.alpha,
                fog: config.fog,
            },
            time: 0.0,
        })
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.transform.matrix()
    }
}

/// One model placed on a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub model: usize,
    pub color: Color,
    pub placement: Placement,
    pub scale: f32,
}

impl Item {
    /// Item-to-ring matrix.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.placement.orientation,
            self.placement.position,
        )
    }
}

/// A rotating group of items sharing one circular layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub name: String,
    pub transform: Transform,
    items: Vec<Item>,
}

impl Ring {
    fn from_config(config: &RingConfig) -> Self {
        Self {
            name: config.name.clone(),
            transform: Transform::from_degrees(config.offset, config.rotation_deg),
            items: Vec::new(),
        }
    }

    /// Items sorted by model index.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, model: usize) -> bool {
        self.items.binary_search_by_key(&model, |i| i.model).is_ok()
    }

    fn insert(&mut self, item: Item) -> bool {
        match self.items.binary_search_by_key(&item.model, |i| i.model) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, item);
                true
            }
        }
    }

    /// Spin the whole group about its parent X axis.
    pub fn rotate_x(&mut self, delta: f32) {
        self.transform.rotation.x += delta;
    }

    /// Item-to-world matrix.
    pub fn world_matrix(&self, item: &Item) -> Mat4 {
        self.transform.matrix() * item.local_matrix()
    }
}

/// One draw of one model: which mesh, where, and in what color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemInstance {
    pub model: usize,
    pub world: Mat4,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: PerspectiveCamera,
    pub fog: Fog,
    pub lighting: Lighting,
    pub water: Water,
    pub clear_color: Color,
    pub emissive_intensity: f32,
    rings: Vec<Ring>,
    layout: CircularLayout,
    model_count: usize,
    palette: Vec<Color>,
    item_scale: f32,
}

impl Scene {
    pub fn from_config(config: &BasinConfig) -> Result<Self, SceneError> {
        let layout = CircularLayout::from_config(&config.layout)?;
        let model_count = config.layout.count as usize;
        if !layout.covers_full_circle(model_count) {
            warn!(
                count = model_count,
                step_deg = config.layout.step_deg,
                "ring layout does not sweep exactly one turn"
            );
        }

        if config.palette.colors.is_empty() {
            return Err(SceneError::EmptyPalette);
        }
        let palette = config
            .palette
            .colors
            .iter()
            .enumerate()
            .map(|(i, c)| parse_color(&format!("palette.colors[{i}]"), c))
            .collect::<Result<Vec<_>, _>>()?;

        if config.rings.is_empty() {
            return Err(SceneError::NoRings);
        }
        let rings = config.rings.iter().map(Ring::from_config).collect();

        Ok(Self {
            camera: PerspectiveCamera::from_config(&config.camera),
            fog: Fog::from_config(&config.fog)?,
            lighting: Lighting::from_config(&config.lighting)?,
            water: Water::from_config(&config.water, layout.center(), layout.radius())?,
            clear_color: parse_color("renderer.clear_color", &config.renderer.clear_color)?,
            emissive_intensity: config.items.emissive_intensity,
            rings,
            layout,
            model_count,
            palette,
            item_scale: config.items.scale,
        })
    }

    pub fn layout(&self) -> &CircularLayout {
        &self.layout
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Number of model files the scene expects, `0..model_count`.
    pub fn model_count(&self) -> usize {
        self.model_count
    }

    /// Palette color for model `index`, wrapping around the palette.
    pub fn color_for(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    /// Place model `index` in every ring. Returns `false` if it was
    /// already attached.
    pub fn attach_model(&mut self, index: usize) -> bool {
        let item = Item {
            model: index,
            color: self.color_for(index),
            placement: self.layout.placement(index),
            scale: self.item_scale,
        };
        let mut added = false;
        for ring in &mut self.rings {
            added |= ring.insert(item);
        }
        if added {
            debug!(index, "attached model to rings");
        }
        added
    }

    /// Total items across all rings.
    pub fn item_count(&self) -> usize {
        self.rings.iter().map(|r| r.items.len()).sum()
    }

    /// Advance water time and spin every ring.
    pub fn advance(&mut self, water_dt: f32, rotation_dt: f32) {
        self.water.time += water_dt;
        for ring in &mut self.rings {
            ring.rotate_x(rotation_dt);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Every attached item in world space, ring by ring.
    pub fn instances(&self) -> impl Iterator<Item = ItemInstance> + '_ {
        self.rings.iter().flat_map(|ring| {
            ring.items.iter().map(move |item| ItemInstance {
                model: item.model,
                world: ring.world_matrix(item),
                color: item.color,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn scene() -> Scene {
        Scene::from_config(&BasinConfig::default()).unwrap()
    }

    #[test]
    fn default_scene_layout() {
        let scene = scene();
        assert_eq!(scene.rings().len(), 2);
        assert_eq!(scene.model_count(), 12);
        assert_eq!(scene.item_count(), 0);
        assert!((scene.water.radius - 9.0).abs() < EPS);
        assert_eq!(scene.rings()[0].transform.translation, Vec3::new(-3.0, 0.0, 0.0));
        assert_eq!(scene.rings()[1].transform.translation, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn attach_adds_item_to_every_ring() {
        let mut scene = scene();
        assert!(scene.attach_model(5));
        assert_eq!(scene.item_count(), 2);
        for ring in scene.rings() {
            assert!(ring.contains(5));
            assert_eq!(ring.items()[0].color, Color::from_hex("#53edce").unwrap());
            assert!((ring.items()[0].scale - 2.0).abs() < EPS);
        }
    }

    #[test]
    fn attach_twice_is_a_no_op() {
        let mut scene = scene();
        assert!(scene.attach_model(1));
        assert!(!scene.attach_model(1));
        assert_eq!(scene.item_count(), 2);
    }

    #[test]
    fn arrangement_is_independent_of_attach_order() {
        let mut a = scene();
        let mut b = scene();
        for i in [7, 2, 11, 0, 5] {
            a.attach_model(i);
        }
        for i in [0, 2, 5, 7, 11] {
            b.attach_model(i);
        }
        assert_eq!(a.rings(), b.rings());
        let models: Vec<_> = a.rings()[0].items().iter().map(|i| i.model).collect();
        assert_eq!(models, vec![0, 2, 5, 7, 11]);
    }

    #[test]
    fn item_placement_uses_its_own_index() {
        let mut scene = scene();
        scene.attach_model(3);
        let item = scene.rings()[0].items()[0];
        assert!(item
            .placement
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), EPS));
    }

    #[test]
    fn palette_wraps() {
        let mut config = BasinConfig::default();
        config.palette.colors = vec!["#ff0000".into(), "#0000ff".into()];
        let scene = Scene::from_config(&config).unwrap();
        assert_eq!(scene.color_for(0), scene.color_for(2));
        assert_eq!(scene.color_for(1), Color::from_u32(0x0000ff));
    }

    #[test]
    fn advance_moves_water_and_rings() {
        let mut scene = scene();
        let before: Vec<f32> = scene.rings().iter().map(|r| r.transform.rotation.x).collect();
        scene.advance(0.5, 0.25);
        assert!((scene.water.time - 0.5).abs() < EPS);
        for (ring, x0) in scene.rings().iter().zip(before) {
            assert!((ring.transform.rotation.x - (x0 + 0.25)).abs() < EPS);
        }
    }

    #[test]
    fn advance_keeps_item_placements() {
        let mut scene = scene();
        scene.attach_model(4);
        let before = scene.rings()[0].items()[0].placement;
        scene.advance(1.0, 1.0);
        assert_eq!(scene.rings()[0].items()[0].placement, before);
    }

    #[test]
    fn instances_include_ring_transform() {
        let mut scene = scene();
        scene.attach_model(0);
        let instances: Vec<_> = scene.instances().collect();
        assert_eq!(instances.len(), 2);
        // Item 0 sits at +X locally; the mirrored rings send it to opposite sides.
        let left = instances[0].world.transform_point3(Vec3::ZERO);
        let right = instances[1].world.transform_point3(Vec3::ZERO);
        assert!(left.abs_diff_eq(Vec3::new(-3.0, 0.0, -10.0), EPS));
        assert!(right.abs_diff_eq(Vec3::new(3.0, 0.0, 10.0), EPS));
    }

    #[test]
    fn resize_updates_camera() {
        let mut scene = scene();
        scene.resize(1000, 500);
        assert!((scene.camera.aspect - 2.0).abs() < EPS);
    }

    #[test]
    fn fog_factor_ramps_between_near_and_far() {
        let scene = scene();
        assert_eq!(scene.fog.factor(1.0), 0.0);
        assert!((scene.fog.factor(17.5) - 0.5).abs() < EPS);
        assert_eq!(scene.fog.factor(100.0), 1.0);
    }

    #[test]
    fn fog_follows_view_depth_not_distance() {
        let scene = scene();
        let cam = &scene.camera;
        let ahead = cam.position + cam.forward() * 17.5;
        let off_axis = ahead + Vec3::new(12.0, -6.0, 0.0);
        let a = scene.fog.factor(cam.view_depth(ahead));
        let b = scene.fog.factor(cam.view_depth(off_axis));
        assert!((a - 0.5).abs() < EPS);
        assert!((a - b).abs() < EPS);
        assert!(scene.fog.factor(cam.position.distance(off_axis)) > b);
    }

    #[test]
    fn light_points_from_its_position() {
        let scene = scene();
        assert!(scene.lighting.direction.abs_diff_eq(Vec3::Z, EPS));
    }

    #[test]
    fn rejects_empty_palette() {
        let mut config = BasinConfig::default();
        config.palette.colors.clear();
        assert!(matches!(
            Scene::from_config(&config),
            Err(SceneError::EmptyPalette)
        ));
    }

    #[test]
    fn rejects_invalid_palette_color() {
        let mut config = BasinConfig::default();
        config.palette.colors[3] = "pink".into();
        let err = Scene::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("palette.colors[3]"));
    }

    #[test]
    fn rejects_no_rings() {
        let mut config = BasinConfig::default();
        config.rings.clear();
        assert!(matches!(Scene::from_config(&config), Err(SceneError::NoRings)));
    }

    #[test]
    fn rejects_zero_radius() {
        let mut config = BasinConfig::default();
        config.layout.radius = 0.0;
        assert!(matches!(
            Scene::from_config(&config),
            Err(SceneError::InvalidRadius(_))
        ));
    }

    #[test]
    fn partial_coverage_still_builds() {
        let mut config = BasinConfig::default();
        config.layout.count = 7;
        let scene = Scene::from_config(&config).unwrap();
        assert!(!scene.layout().covers_full_circle(7));
    }
}
