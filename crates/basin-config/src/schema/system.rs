//! System configuration types: renderer and logging.

use serde::{Deserialize, Serialize};

/// Renderer surface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Color the frame is cleared to before drawing.
    pub clear_color: String,
    /// Wait for vertical blank when presenting.
    pub vsync: bool,
    /// Log frame timing at debug level once per second.
    pub log_fps: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: "#010305".into(),
            vsync: true,
            log_fps: false,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The equivalent `tracing` filter directive value.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
