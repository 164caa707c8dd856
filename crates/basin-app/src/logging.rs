//! `tracing` subscriber setup.

use basin_config::schema::LogLevel;
use tracing_subscriber::EnvFilter;

/// Crates whose info output drowns the app's own logs.
const QUIET_TARGETS: &[&str] = &["wgpu_core", "wgpu_hal", "naga"];

/// Default directive for a configured level, with GPU internals held at warn.
pub fn default_directive(level: LogLevel) -> String {
    let mut directive = level.as_filter().to_string();
    for target in QUIET_TARGETS {
        directive.push_str(&format!(",{target}=warn"));
    }
    directive
}

/// Filter precedence: CLI override, then `RUST_LOG`, then the config level.
pub fn filter(cli_override: Option<&str>, level: LogLevel) -> EnvFilter {
    if let Some(directive) = cli_override {
        return EnvFilter::new(directive);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

/// Install the global subscriber.
pub fn init(cli_override: Option<&str>, level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(cli_override, level))
        .init();
}
