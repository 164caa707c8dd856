//! Instanced, flat-shaded rendering of the text models on both rings.

use std::collections::HashMap;

use basin_scene::assets::ModelMesh;
use basin_scene::Scene;
use wgpu::util::DeviceExt;

use super::batch::{build_batches, DrawBatch};
use crate::gpu::{DEPTH_FORMAT, HDR_FORMAT};
use crate::mesh::{InstanceRaw, ModelVertex};

/// Vertex and index buffers of one uploaded model.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

pub struct ItemPipeline {
    pipeline: wgpu::RenderPipeline,
    meshes: HashMap<usize, GpuMesh>,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    batches: Vec<DrawBatch>,
}

impl ItemPipeline {
    /// Create the item pipeline. `scene_layout` is the group 0 layout of the
    /// shared scene uniforms.
    pub fn new(
        device: &wgpu::Device,
        scene_layout: &wgpu::BindGroupLayout,
        initial_capacity: usize,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("items shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/items.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("items pipeline layout"),
            bind_group_layouts: &[scene_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("items pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[ModelVertex::layout(), InstanceRaw::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // Text meshes are viewed from both sides as the rings turn.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let instance_capacity = initial_capacity.max(1);
        let instance_buffer = Self::create_instance_buffer(device, instance_capacity);

        Self {
            pipeline,
            meshes: HashMap::new(),
            instance_buffer,
            instance_capacity,
            batches: Vec::new(),
        }
    }

    fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("item instances"),
            size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Upload the geometry of model `index`. Replaces any earlier upload.
    pub fn upload_model(&mut self, device: &wgpu::Device, index: usize, mesh: &ModelMesh) {
        let vertices: Vec<ModelVertex> = mesh
            .positions
            .iter()
            .map(|&position| ModelVertex { position })
            .collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("item model vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("item model indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        tracing::debug!(
            index,
            vertices = vertices.len(),
            triangles = mesh.triangle_count(),
            "Uploaded model mesh"
        );

        self.meshes.insert(
            index,
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: mesh.indices.len() as u32,
            },
        );
    }

    pub fn model_count(&self) -> usize {
        self.meshes.len()
    }

    /// Rebuild the instance buffer from the scene's current ring transforms.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, scene: &Scene) {
        let (instances, batches) = build_batches(scene);

        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instance_buffer = Self::create_instance_buffer(device, self.instance_capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
        self.batches = batches;
    }

    /// Record draws for every prepared batch whose model has been uploaded.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, scene_bind_group: &wgpu::BindGroup) {
        if self.batches.is_empty() {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, scene_bind_group, &[]);
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

        for batch in &self.batches {
            let Some(mesh) = self.meshes.get(&batch.model) else {
                continue;
            };
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..mesh.index_count, 0, batch.instances.clone());
        }
    }
}
