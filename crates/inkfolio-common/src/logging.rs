//! Structured logging infrastructure for Inkfolio

use crate::error::{InkfolioError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn` or `error`
    pub level: String,
    /// Whether to emit JSON lines instead of human readable output
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Build the level filter, falling back to `info` for unparsable directives
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Logs go to stderr so that rendered page output on stdout stays clean.
/// Calling this twice returns an error instead of panicking.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let file = match &config.file_path {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        ),
        None => None,
    };

    let result = match (config.json_format, file) {
        (true, Some(file)) => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        (true, None) => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (false, Some(file)) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(config.include_targets)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        (false, None) if config.pretty_format => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (false, None) => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| InkfolioError::config(format!("Failed to initialize logging: {e}")))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(LoggingConfig::default())
}

/// Initialize logging for development (pretty, debug level)
pub fn init_dev_logging() -> Result<()> {
    init_logging(LoggingConfig {
        level: "debug".to_string(),
        pretty_format: true,
        ..LoggingConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
        assert!(!config.pretty_format);
        assert!(config.file_path.is_none());
        assert!(config.include_targets);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig {
            level: "not a [valid directive".to_string(),
            ..LoggingConfig::default()
        };
        assert!(EnvFilter::try_new(&config.level).is_err());
        let filter = config.env_filter();
        assert!(filter.max_level_hint().is_some());
    }
}
