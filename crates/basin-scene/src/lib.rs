//! Scene model for the neon basin: circular item layout, scene graph,
//! frame driver, and background asset loading.
//!
//! Nothing here touches the GPU. The renderer reads a [`Scene`] each frame
//! and the application feeds it asset events, resize, and wheel input.

pub mod assets;
pub mod camera;
pub mod error;
pub mod frame;
pub mod graph;
pub mod layout;
pub mod transform;

pub use camera::PerspectiveCamera;
pub use error::{AssetError, SceneError};
pub use frame::{BloomOscillator, FrameDriver, FrameTick};
pub use graph::{Fog, Item, ItemInstance, Lighting, Ring, Scene, Water, WaterParams};
pub use layout::{CircularLayout, Placement, REFERENCE_AXIS};
pub use transform::Transform;
