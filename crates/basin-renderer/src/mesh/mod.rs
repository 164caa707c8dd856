//! Vertex formats and procedural geometry.

mod cylinder;
mod types;

pub use cylinder::*;
pub use types::*;
