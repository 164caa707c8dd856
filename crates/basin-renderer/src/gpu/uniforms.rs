//! Per-frame scene uniforms shared by the water and item passes.

use basin_scene::Scene;

use super::layout::uniform_entry;

/// GPU-side uniform block matching the WGSL `SceneUniforms` struct.
///
/// Layout: mat4 + 7 × vec4 = 176 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// Camera world position; `w` unused.
    pub camera_pos: [f32; 4],
    /// Unit viewing direction, for view-depth fog; `w` unused.
    pub camera_forward: [f32; 4],
    /// Linear fog color; `w` is 1.0 when fog is enabled.
    pub fog_color: [f32; 4],
    /// Fog near, fog far, item emissive intensity, unused.
    pub fog_params: [f32; 4],
    /// Linear ambient radiance.
    pub ambient: [f32; 4],
    /// Unit vector towards the directional light.
    pub light_dir: [f32; 4],
    /// Linear directional radiance.
    pub light_color: [f32; 4],
}

impl SceneUniforms {
    pub fn from_scene(scene: &Scene) -> Self {
        let camera = &scene.camera;
        let fog = &scene.fog;
        let lighting = &scene.lighting;
        let [fr, fg, fb] = fog.color.to_linear();
        let [ar, ag, ab] = lighting.ambient;
        let [lr, lg, lb] = lighting.directional;
        let dir = lighting.direction;

        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.position.extend(1.0).to_array(),
            camera_forward: camera.forward().extend(0.0).to_array(),
            fog_color: [fr, fg, fb, if fog.enabled { 1.0 } else { 0.0 }],
            fog_params: [fog.near, fog.far, scene.emissive_intensity, 0.0],
            ambient: [ar, ag, ab, 0.0],
            light_dir: [dir.x, dir.y, dir.z, 0.0],
            light_color: [lr, lg, lb, 0.0],
        }
    }
}

/// Buffer, layout, and bind group for [`SceneUniforms`] at group 0.
pub struct SceneUniformBuffer {
    pub buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl SceneUniformBuffer {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene uniforms layout"),
            entries: &[uniform_entry::<SceneUniforms>(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene uniforms bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

// =============================================================================
// Tests
// =============================================================================
