//! Structured logging initialization.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter`. The
//! `RUST_LOG` environment variable takes precedence over the configured level.

#[cfg(feature = "logging")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::GymResult;
use serde::{Deserialize, Serialize};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a log format, falling back to [`LogFormat::Pretty`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Builds the default filter directive for a base level.
#[must_use]
pub fn default_directive(level: &str) -> String {
    format!("{level},gym=debug,sqlx=warn")
}

/// Initializes the global tracing subscriber.
///
/// Calling this more than once returns a configuration error instead of
/// panicking, so tests and embedding applications may call it freely.
#[cfg(feature = "logging")]
pub fn init_logging(level: &str, format: LogFormat) -> GymResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(level)))
        .map_err(|e| crate::GymError::configuration(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| crate::GymError::configuration(format!("Logging already initialized: {}", e)))?;

    tracing::info!(level = %level, format = ?format, "Logging initialized");
    Ok(())
}

/// Placeholder for when the logging feature is disabled.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_level: &str, _format: LogFormat) -> GymResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("info"), "info,gym=debug,sqlx=warn");
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let _ = init_logging("info", LogFormat::Pretty);
        let second = init_logging("info", LogFormat::Json);
        assert!(second.is_err());
    }
}
