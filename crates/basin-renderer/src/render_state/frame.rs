use basin_scene::Scene;

use crate::gpu::{RendererError, SceneUniforms};

use super::helpers::log_first_frame;
use super::state::RenderState;

const FPS_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);

impl RenderState {
    /// Render one frame of `scene` with the given bloom strength.
    ///
    /// A lost or outdated surface is reconfigured and the frame dropped.
    pub fn render(&mut self, scene: &Scene, bloom_strength: f32) -> Result<(), RendererError> {
        self.timer.begin_frame();

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let queue = &self.gpu.queue;
        self.scene_uniforms
            .update(queue, &SceneUniforms::from_scene(scene));
        self.water.update(queue, &scene.water);
        self.items.prepare(&self.gpu.device, queue, scene);
        self.composite
            .update_uniforms(queue, self.bloom.settings.effective_strength(bloom_strength));

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("basin frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("basin scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.water.draw(&mut pass, &self.scene_uniforms.bind_group);
            self.items.draw(&mut pass, &self.scene_uniforms.bind_group);
        }

        self.bloom.render(&mut encoder);
        self.composite.render(&mut encoder, &view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        if self.log_fps && self.timer.report_due(FPS_LOG_INTERVAL) {
            tracing::info!(
                "Frame timing: {:.1} fps, {:.2} ms ({} frames)",
                self.timer.fps(),
                self.timer.frame_time_ms(),
                self.timer.total_frames(),
            );
        }

        Ok(())
    }
}
