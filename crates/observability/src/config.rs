//! Environment-driven logging configuration.

use stockroom_core::{DomainError, DomainResult};

/// Filter directive variable; falls back to `RUST_LOG`.
pub const LOG_ENV: &str = "STOCKROOM_LOG";
/// Output format variable: `json` (default) or `pretty`.
pub const LOG_FORMAT_ENV: &str = "STOCKROOM_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl core::str::FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(DomainError::validation(format!(
                "{LOG_FORMAT_ENV} must be `json` or `pretty`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve config against an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let filter = get(LOG_ENV)
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match get(LOG_FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}
