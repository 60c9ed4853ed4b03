//! Runtime validation of the site configuration.

use crate::defaults::{LOG_LEVELS, MAX_SPLASH_DELAY_MS};
use crate::loader::ConfigError;
use crate::schema::SiteConfig;

impl SiteConfig {
    /// Check every section, reporting the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preferences.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                field: "preferences.path".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.splash.delay_ms > MAX_SPLASH_DELAY_MS {
            return Err(ConfigError::Validation {
                field: "splash.delay_ms".to_string(),
                message: format!(
                    "{} exceeds the maximum of {MAX_SPLASH_DELAY_MS}",
                    self.splash.delay_ms
                ),
            });
        }

        let level = self.logging.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation {
                field: "logging.level".to_string(),
                message: format!(
                    "'{}' is not one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn field_of(result: Result<(), ConfigError>) -> String {
        match result {
            Err(ConfigError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_filter_directives_are_rejected() {
        let mut config = SiteConfig::default();
        config.logging.level = "inkfolio_site=debug".to_string();
        assert_eq!(field_of(config.validate()), "logging.level");

        config.logging.level = " WARN ".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_preferences_path() {
        let mut config = SiteConfig::default();
        config.preferences.path = PathBuf::new();
        assert_eq!(field_of(config.validate()), "preferences.path");
    }

    #[test]
    fn test_splash_delay_limit() {
        let mut config = SiteConfig::default();
        config.splash.delay_ms = MAX_SPLASH_DELAY_MS;
        assert!(config.validate().is_ok());

        config.splash.delay_ms = MAX_SPLASH_DELAY_MS + 1;
        assert_eq!(field_of(config.validate()), "splash.delay_ms");
    }

    #[test]
    fn test_log_levels() {
        let mut config = SiteConfig::default();
        for level in ["trace", "DEBUG", " warn ", "error"] {
            config.logging.level = level.to_string();
            assert!(config.validate().is_ok(), "{level} should be accepted");
        }

        config.logging.level = "verbose".to_string();
        assert_eq!(field_of(config.validate()), "logging.level");
    }
}
