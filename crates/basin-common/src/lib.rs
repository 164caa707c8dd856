pub mod color;
pub mod errors;

pub use color::Color;
pub use errors::{BasinError, ConfigError};

pub type Result<T> = std::result::Result<T, BasinError>;
