//! Composite pipeline: final pass adding the bloom glow to the scene and
//! writing the result to the surface.

use crate::gpu::{
    fullscreen_pass, fullscreen_pipeline, linear_sampler, sampler_entry, texture_entry,
    uniform_entry,
};

/// Matches the WGSL `CompositeUniforms` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CompositeUniforms {
    pub bloom_strength: f32,
    pub _padding: [f32; 3],
}

impl CompositeUniforms {
    pub fn new(bloom_strength: f32) -> Self {
        Self {
            bloom_strength,
            _padding: [0.0; 3],
        }
    }
}

pub struct CompositePipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
}

impl CompositePipeline {
    /// `scene_view` is the HDR scene target, `bloom_view` the blurred glow,
    /// and `format` the surface format the result is written in.
    pub fn new(
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        bloom_view: &wgpu::TextureView,
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("composite shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/composite.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("composite uniforms"),
            size: std::mem::size_of::<CompositeUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("composite bind group layout"),
            entries: &[
                uniform_entry::<CompositeUniforms>(0, wgpu::ShaderStages::FRAGMENT),
                texture_entry(1),
                texture_entry(2),
                sampler_entry(3),
            ],
        });
        let sampler = linear_sampler(device, "composite sampler");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("composite pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = fullscreen_pipeline(
            device,
            "composite pipeline",
            &pipeline_layout,
            &shader,
            "fs_main",
            format,
        );

        let bind_group = Self::bind(
            device,
            &bind_group_layout,
            &uniform_buffer,
            &sampler,
            scene_view,
            bloom_view,
        );

        Self {
            pipeline,
            bind_group,
            bind_group_layout,
            uniform_buffer,
            sampler,
        }
    }

    /// Rebind after the scene and bloom targets were recreated.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        bloom_view: &wgpu::TextureView,
    ) {
        self.bind_group = Self::bind(
            device,
            &self.bind_group_layout,
            &self.uniform_buffer,
            &self.sampler,
            scene_view,
            bloom_view,
        );
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, bloom_strength: f32) {
        let uniforms = CompositeUniforms::new(bloom_strength);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the composite pass onto the surface.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, surface_view: &wgpu::TextureView) {
        fullscreen_pass(
            encoder,
            "composite pass",
            surface_view,
            wgpu::Color::BLACK,
            Some((&self.pipeline, &self.bind_group)),
        );
    }

    fn bind(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        sampler: &wgpu::Sampler,
        scene_view: &wgpu::TextureView,
        bloom_view: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        let resources = [
            uniform_buffer.as_entire_binding(),
            wgpu::BindingResource::TextureView(scene_view),
            wgpu::BindingResource::TextureView(bloom_view),
            wgpu::BindingResource::Sampler(sampler),
        ];
        let entries: Vec<wgpu::BindGroupEntry> = resources
            .into_iter()
            .zip(0u32..)
            .map(|(resource, binding)| wgpu::BindGroupEntry { binding, resource })
            .collect();
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("composite bind group"),
            layout,
            entries: &entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_uniforms_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<CompositeUniforms>(), 16);
    }

    #[test]
    fn composite_uniforms_new_zeroes_padding() {
        let u = CompositeUniforms::new(1.4);
        assert_eq!(u.bloom_strength, 1.4);
        assert_eq!(u._padding, [0.0; 3]);
    }
}
