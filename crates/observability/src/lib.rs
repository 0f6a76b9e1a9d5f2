//! Tracing/logging setup for processes embedding the stockroom crates.

pub mod config;
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize process-wide tracing from an explicit config.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}
