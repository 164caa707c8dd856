use std::sync::Arc;
use winit::window::Window;

use basin_config::BasinConfig;
use basin_scene::assets::{ModelMesh, NormalMap};
use basin_scene::Scene;

use super::composite::CompositePipeline;
use super::helpers::{linear_clear_color, SceneTargets};
use crate::bloom::{BloomPipeline, BloomSettings};
use crate::gpu::{GpuContext, RendererError, SceneUniformBuffer};
use crate::items::ItemPipeline;
use crate::perf::FrameTimer;
use crate::water::WaterPipeline;

/// Every GPU resource needed to draw the basin scene.
///
/// Frame layout: scene pass (water, then items) into an HDR target, two bloom
/// passes, then the composite onto the surface.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) scene_uniforms: SceneUniformBuffer,
    pub(super) targets: SceneTargets,
    pub(super) water: WaterPipeline,
    pub(super) items: ItemPipeline,
    pub(super) bloom: BloomPipeline,
    pub(super) composite: CompositePipeline,
    pub clear_color: wgpu::Color,
    pub timer: FrameTimer,
    pub(super) log_fps: bool,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(
        window: Arc<Window>,
        config: &BasinConfig,
        scene: &Scene,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.renderer.vsync).await?;

        let scene_uniforms = SceneUniformBuffer::new(&gpu.device);
        let targets = SceneTargets::new(&gpu.device, gpu.size);

        let water = WaterPipeline::new(
            &gpu.device,
            &gpu.queue,
            &scene_uniforms.layout,
            &scene.water,
        );
        let items = ItemPipeline::new(
            &gpu.device,
            &scene_uniforms.layout,
            scene.model_count() * scene.rings().len(),
        );

        let bloom = BloomPipeline::new(
            &gpu.device,
            &targets.color_view,
            gpu.size,
            BloomSettings::from_config(&config.bloom),
        );
        bloom.update_uniforms(&gpu.queue, gpu.size);

        let composite = CompositePipeline::new(
            &gpu.device,
            &targets.color_view,
            bloom.output_view(),
            gpu.format(),
        );

        tracing::info!(
            "Render state ready ({}x{}, bloom={})",
            gpu.size.width,
            gpu.size.height,
            bloom.settings.enabled,
        );

        Ok(Self {
            clear_color: linear_clear_color(scene.clear_color),
            gpu,
            scene_uniforms,
            targets,
            water,
            items,
            bloom,
            composite,
            timer: FrameTimer::new(),
            log_fps: config.renderer.log_fps,
        })
    }

    /// Handle a window resize: reconfigure the surface and rebuild every
    /// size-dependent target.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        let size = self.gpu.size;
        if self.targets.matches(size) {
            return;
        }

        self.targets = SceneTargets::new(&self.gpu.device, size);
        self.bloom
            .resize(&self.gpu.device, &self.targets.color_view, size);
        self.bloom.update_uniforms(&self.gpu.queue, size);
        self.composite.resize(
            &self.gpu.device,
            &self.targets.color_view,
            self.bloom.output_view(),
        );
        tracing::debug!("Render targets resized to {}x{}", size.width, size.height);
    }

    /// Upload a loaded text model so items using `index` can be drawn.
    pub fn upload_model(&mut self, index: usize, mesh: &ModelMesh) {
        self.items.upload_model(&self.gpu.device, index, mesh);
    }

    /// Text models uploaded to the GPU so far.
    pub fn uploaded_models(&self) -> usize {
        self.items.model_count()
    }

    /// Bind the decoded water normal map.
    pub fn set_water_normals(&mut self, map: &NormalMap) {
        self.water
            .set_normal_map(&self.gpu.device, &self.gpu.queue, map);
    }

    pub fn water_normals_loaded(&self) -> bool {
        self.water.normal_map_loaded()
    }
}
