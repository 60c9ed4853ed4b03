//! Default values for the site configuration.

use crate::schema::{LoggingSettings, PreferencesConfig, SplashConfig};
use std::path::PathBuf;

/// Default location of the language preference file.
pub const DEFAULT_PREFERENCES_PATH: &str = ".inkfolio/preferences.toml";

/// Default splash delay in milliseconds.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;

/// Longest accepted splash delay in milliseconds.
pub const MAX_SPLASH_DELAY_MS: u64 = 10_000;

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted plain log levels.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SPLASH_DELAY_MS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::SiteConfig;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.preferences.path, PathBuf::from(".inkfolio/preferences.toml"));
        assert_eq!(config.splash.delay_ms, 2000);
        assert_eq!(config.splash.delay().as_secs(), 2);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }
}
