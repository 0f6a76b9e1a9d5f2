//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Initialize tracing/logging for the process from `STOCKROOM_LOG*` variables.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    match ObservabilityConfig::from_env() {
        Ok(config) => init_with(&config),
        Err(err) => {
            init_with(&ObservabilityConfig::default());
            tracing::warn!(error = %err, "invalid logging config; using defaults");
        }
    }
}

/// Initialize tracing/logging with an explicit config.
///
/// An unparseable filter directive falls back to `info`.
pub fn init_with(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        crate::config::LogFormat::Json => builder.json().try_init(),
        crate::config::LogFormat::Pretty => builder.pretty().try_init(),
    };
}
