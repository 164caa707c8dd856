//! Bloom post-processing pipeline.
//!
//! Two passes: a thresholded horizontal blur of the scene target, then a
//! vertical blur. The composite pass adds the result scaled by the
//! per-frame strength. Disabled when `bloom.enabled = false`.

mod pipeline;
mod types;

pub use pipeline::*;
pub use types::*;
