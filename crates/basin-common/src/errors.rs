use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Startup failures that end the `basin` binary with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum BasinError {
    #[error("scene error: {0}")]
    Scene(String),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("event loop error: {0}")]
    EventLoop(String),
}
