//! Animated water surface on the basin cylinder.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
