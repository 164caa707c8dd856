//! Two-pass Gaussian blur pipeline for bloom effects.
//!
//! Pass 1: bright pass + horizontal blur (scene target → half)
//! Pass 2: vertical blur (half → output)

use super::types::{BloomSettings, BloomUniforms};
use crate::gpu::{
    create_render_target, fullscreen_pass, fullscreen_pipeline, linear_sampler, sampler_entry,
    texture_entry, uniform_entry, PhysicalSize, HDR_FORMAT,
};

/// Intermediate and output targets plus the bind groups reading them.
struct BloomTargets {
    half_view: wgpu::TextureView,
    output_view: wgpu::TextureView,
    read_source: wgpu::BindGroup,
    read_half: wgpu::BindGroup,
}

pub struct BloomPipeline {
    bright_blur_h: wgpu::RenderPipeline,
    blur_v: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    targets: BloomTargets,
    pub settings: BloomSettings,
}

impl BloomPipeline {
    /// Create the bloom pipeline reading from `source_view`.
    pub fn new(
        device: &wgpu::Device,
        source_view: &wgpu::TextureView,
        size: PhysicalSize,
        settings: BloomSettings,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("bloom shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/bloom.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("bloom uniforms"),
            size: std::mem::size_of::<BloomUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bloom bind group layout"),
            entries: &[
                uniform_entry::<BloomUniforms>(0, wgpu::ShaderStages::FRAGMENT),
                texture_entry(1),
                sampler_entry(2),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("bloom pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let bright_blur_h = fullscreen_pipeline(
            device,
            "bloom bright+h pipeline",
            &pipeline_layout,
            &shader,
            "fs_bright_blur_h",
            HDR_FORMAT,
        );
        let blur_v = fullscreen_pipeline(
            device,
            "bloom v pipeline",
            &pipeline_layout,
            &shader,
            "fs_blur_v",
            HDR_FORMAT,
        );

        let sampler = linear_sampler(device, "bloom sampler");
        let targets = Self::create_targets(
            device,
            &bind_group_layout,
            &uniform_buffer,
            &sampler,
            source_view,
            size,
        );

        Self {
            bright_blur_h,
            blur_v,
            uniform_buffer,
            bind_group_layout,
            sampler,
            targets,
            settings,
        }
    }

    fn create_targets(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        sampler: &wgpu::Sampler,
        source_view: &wgpu::TextureView,
        size: PhysicalSize,
    ) -> BloomTargets {
        let (_, half_view) = create_render_target(device, size, HDR_FORMAT, "bloom half");
        let (_, output_view) = create_render_target(device, size, HDR_FORMAT, "bloom output");

        let read = |view: &wgpu::TextureView, label: &str| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            })
        };

        BloomTargets {
            read_source: read(source_view, "bloom read source"),
            read_half: read(&half_view, "bloom read half"),
            half_view,
            output_view,
        }
    }

    /// Recreate targets and bind groups after a resize.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        source_view: &wgpu::TextureView,
        size: PhysicalSize,
    ) {
        self.targets = Self::create_targets(
            device,
            &self.bind_group_layout,
            &self.uniform_buffer,
            &self.sampler,
            source_view,
            size,
        );
    }

    /// Upload texel size, threshold and radius for `size`.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, size: PhysicalSize) {
        let spread = self.settings.spread();
        let uniforms = BloomUniforms {
            texel_size: [
                spread / size.width.max(1) as f32,
                spread / size.height.max(1) as f32,
            ],
            threshold: self.settings.threshold,
            radius: self.settings.radius,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the bloom passes. When bloom is disabled the output is only
    /// cleared, so the composite never reads a stale glow.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder) {
        let t = &self.targets;
        if !self.settings.enabled {
            fullscreen_pass(encoder, "bloom clear", &t.output_view, wgpu::Color::BLACK, None);
            return;
        }
        fullscreen_pass(
            encoder,
            "bloom bright+h pass",
            &t.half_view,
            wgpu::Color::BLACK,
            Some((&self.bright_blur_h, &t.read_source)),
        );
        fullscreen_pass(
            encoder,
            "bloom v pass",
            &t.output_view,
            wgpu::Color::BLACK,
            Some((&self.blur_v, &t.read_half)),
        );
    }

    /// The final blurred texture view.
    pub fn output_view(&self) -> &wgpu::TextureView {
        &self.targets.output_view
    }
}
