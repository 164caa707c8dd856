mod composite;
mod frame;
mod helpers;
mod state;

pub use composite::{CompositePipeline, CompositeUniforms};
pub use state::RenderState;
