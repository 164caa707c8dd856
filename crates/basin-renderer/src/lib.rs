//! GPU rendering for the basin scene using wgpu.
//!
//! Draws the water cylinder and the instanced text models into an HDR
//! target, blurs the bright parts for bloom, and composites onto the
//! window surface.

pub mod bloom;
pub mod gpu;
pub mod items;
pub mod mesh;
pub mod perf;
pub mod render_state;
pub mod water;

pub use bloom::{BloomPipeline, BloomSettings, BloomUniforms};
pub use gpu::{GpuContext, PhysicalSize, RendererError, SceneUniforms};
pub use items::{build_batches, DrawBatch, ItemPipeline};
pub use mesh::{generate_cylinder_mesh, InstanceRaw, ModelVertex, WaterVertex};
pub use perf::FrameTimer;
pub use render_state::RenderState;
pub use water::{WaterPipeline, WaterUniforms};
