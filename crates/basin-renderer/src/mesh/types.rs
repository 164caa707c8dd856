//! Vertex and instance layouts for the scene pass.

use basin_scene::ItemInstance;

/// Vertex of the water cylinder.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaterVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl WaterVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<WaterVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Position-only vertex of a text model. Normals are derived per face in the
/// fragment shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
}

impl ModelVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-instance data for one placed item: world matrix and linear color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x4,
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<&ItemInstance> for InstanceRaw {
    fn from(instance: &ItemInstance) -> Self {
        Self {
            model: instance.world.to_cols_array_2d(),
            color: instance.color.to_linear_rgba(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use basin_common::Color;
    use glam::{Mat4, Vec3};

    #[test]
    fn water_vertex_size() {
        assert_eq!(std::mem::size_of::<WaterVertex>(), 32);
    }

    #[test]
    fn model_vertex_size() {
        assert_eq!(std::mem::size_of::<ModelVertex>(), 12);
    }

    #[test]
    fn instance_raw_size_is_80_bytes() {
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 80);
    }

    #[test]
    fn instance_attributes_follow_vertex_position() {
        let layout = InstanceRaw::layout();
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        let locations: Vec<u32> = layout.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![1, 2, 3, 4, 5]);
        assert_eq!(layout.attributes[4].offset, 64);
    }

    #[test]
    fn instance_raw_from_item_instance() {
        let instance = ItemInstance {
            model: 3,
            world: Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            color: Color::from_rgba(255, 0, 0, 255),
        };
        let raw = InstanceRaw::from(&instance);
        assert_eq!(raw.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(raw.color, [1.0, 0.0, 0.0, 1.0]);
    }
}
