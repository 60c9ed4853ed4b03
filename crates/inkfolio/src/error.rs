//! Application-wide error types using thiserror.

use inkfolio_common::InkfolioError;
use inkfolio_config::ConfigError;
use inkfolio_i18n::I18nError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Locale catalog error.
    #[error("Localization error: {0}")]
    Localization(#[from] I18nError),

    /// Error raised while starting or driving a site session.
    #[error("Site error: {0}")]
    Site(#[from] InkfolioError),

    /// JSON output error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
