//! Text model rendering for the two rings.

mod batch;
mod pipeline;

pub use batch::*;
pub use pipeline::*;
