//! Error types for internationalization operations

use inkfolio_common::InkfolioError;
use thiserror::Error;

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

/// Errors that can occur while building or querying the locale catalog
#[derive(Error, Debug)]
pub enum I18nError {
    /// Language code is not one of the supported codes
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    /// Language identifier could not be parsed
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// A supported language has no Fluent resource
    #[error("No locale resource registered for '{locale}'")]
    MissingResource {
        /// Language code without a resource
        locale: String,
    },

    /// Fluent resource failed to parse
    #[error("Failed to parse Fluent resource for '{locale}': {}", .errors.join("; "))]
    FluentParse {
        /// Language code of the resource
        locale: String,
        /// Parser diagnostics
        errors: Vec<String>,
    },

    /// Fluent resource could not be added to its bundle
    #[error("Failed to build Fluent bundle for '{locale}': {}", .errors.join("; "))]
    BundleCreation {
        /// Language code of the bundle
        locale: String,
        /// Bundle diagnostics
        errors: Vec<String>,
    },

    /// Bundle is missing one or more messages
    #[error("Locale '{locale}' is missing {} message(s): {}", .keys.len(), .keys.join(", "))]
    IncompleteBundle {
        /// Language code of the incomplete bundle
        locale: String,
        /// Message ids that were not found
        keys: Vec<String>,
    },

    /// Bundle could not be serialized for inspection
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<I18nError> for InkfolioError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::MissingResource { ref locale }
            | I18nError::FluentParse { ref locale, .. }
            | I18nError::BundleCreation { ref locale, .. }
            | I18nError::IncompleteBundle { ref locale, .. } => {
                Self::localization_with_locale(err.to_string(), locale.clone())
            }
            I18nError::Serialization(source) => Self::Serialization(source),
            I18nError::UnknownLanguage(_) | I18nError::InvalidLanguageId(_) => {
                Self::localization(err.to_string())
            }
        }
    }
}
