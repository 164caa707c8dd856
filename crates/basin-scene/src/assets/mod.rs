//! Model and texture loading.
//!
//! Files are decoded on short-lived background threads and handed back to
//! the event loop through a channel. A failed load is logged and reported
//! once; there is no retry, timeout, or cancellation.

mod loader;
mod obj;
mod paths;
mod texture;

pub use loader::{AssetEvent, AssetLoader};
pub use obj::{load_obj, parse_obj, ModelMesh};
pub use paths::AssetPaths;
pub use texture::{decode_normal_map, load_normal_map, NormalMap};
