//! Configuration loading with environment variable overrides.

use crate::schema::SiteConfig;
use inkfolio_common::InkfolioError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "INKFOLIO_CONFIG_PATH";
/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "inkfolio.toml";
/// Overrides `preferences.path`.
pub const PREFERENCES_PATH_ENV: &str = "INKFOLIO_PREFERENCES_PATH";
/// Overrides `splash.delay_ms`.
pub const SPLASH_MS_ENV: &str = "INKFOLIO_SPLASH_MS";
/// Overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "INKFOLIO_LOG_LEVEL";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Invalid configuration for '{field}': {message}")]
    Validation {
        /// Dotted name of the offending field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for InkfolioError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        Self::config_with_source(message, err)
    }
}

/// Configuration loader for the site
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration using the process environment
    ///
    /// Reads the file named by `INKFOLIO_CONFIG_PATH`, else `inkfolio.toml`
    /// if it exists, else the defaults. Environment overrides are applied
    /// before validation.
    pub fn load() -> Result<SiteConfig, ConfigError> {
        Self::load_with(env_lookup)
    }

    /// Load configuration reading variables through `lookup`
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<SiteConfig, ConfigError> {
        let config = if let Some(path) = Self::source_with(&lookup) {
            Self::read_file(&path)?
        } else {
            debug!("No configuration file found, using defaults");
            SiteConfig::default()
        };

        Self::finish(config, &lookup)
    }

    /// File [`Self::load`] reads, or `None` when it falls back to defaults
    #[must_use]
    pub fn source() -> Option<PathBuf> {
        Self::source_with(env_lookup)
    }

    /// File [`Self::load_with`] reads for the given variables
    pub fn source_with(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        if let Some(path) = lookup(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        default.exists().then(|| default.to_path_buf())
    }

    /// Load configuration from a specific file, with environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
        Self::load_from_file_with(path, env_lookup)
    }

    /// Load configuration from a specific file, reading variables through `lookup`
    pub fn load_from_file_with(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<SiteConfig, ConfigError> {
        let config = Self::read_file(path.as_ref())?;
        Self::finish(config, &lookup)
    }

    /// Parse and validate configuration text without consulting the environment
    pub fn load_from_str(content: &str) -> Result<SiteConfig, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_overrides(
        config: &mut SiteConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = lookup(PREFERENCES_PATH_ENV) {
            config.preferences.path = PathBuf::from(path);
        }

        if let Some(delay) = lookup(SPLASH_MS_ENV) {
            config.splash.delay_ms =
                delay
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::EnvParse {
                        var: SPLASH_MS_ENV.to_string(),
                        source: Box::new(e),
                    })?;
        }

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.logging.level = level;
        }

        Ok(())
    }

    fn read_file(path: &Path) -> Result<SiteConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    fn finish(
        mut config: SiteConfig,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<SiteConfig, ConfigError> {
        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;
        Ok(config)
    }
}

fn env_lookup(var: &str) -> Option<String> {
    env::var(var).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkfolio_common::test_utils::config_fixtures::{full_config_toml, minimal_config_toml};
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_load_minimal_config() {
        let config = ConfigLoader::load_from_str(minimal_config_toml()).unwrap();
        assert_eq!(config.preferences.path, PathBuf::from("prefs/preferences.toml"));
        assert_eq!(config.splash.delay_ms, 2000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_full_config() {
        let config = ConfigLoader::load_from_str(full_config_toml()).unwrap();
        assert_eq!(config.preferences.path, PathBuf::from("state/preferences.toml"));
        assert_eq!(config.splash.delay_ms, 250);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.logging.file, Some(PathBuf::from("inkfolio.log")));
    }

    #[test]
    fn test_source_follows_config_path_variable() {
        let source = ConfigLoader::source_with(vars(&[(CONFIG_PATH_ENV, "/etc/inkfolio/site.toml")]));
        assert_eq!(source, Some(PathBuf::from("/etc/inkfolio/site.toml")));
    }

    #[test]
    fn test_invalid_toml() {
        let result = ConfigLoader::load_from_str("[splash\ndelay_ms = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = ConfigLoader::load_from_str("[splash]\ndelay_ms = \"soon\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validation_error() {
        let result = ConfigLoader::load_from_str("[splash]\ndelay_ms = 60000\n");
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "splash.delay_ms"
        ));
    }

    #[test]
    fn test_environment_variable_overrides() {
        let mut config = SiteConfig::default();
        ConfigLoader::apply_overrides(
            &mut config,
            vars(&[
                (PREFERENCES_PATH_ENV, "/tmp/prefs.toml"),
                (SPLASH_MS_ENV, " 500 "),
                (LOG_LEVEL_ENV, "warn"),
            ]),
        )
        .unwrap();

        assert_eq!(config.preferences.path, PathBuf::from("/tmp/prefs.toml"));
        assert_eq!(config.splash.delay_ms, 500);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_environment_override() {
        let mut config = SiteConfig::default();
        let result = ConfigLoader::apply_overrides(&mut config, vars(&[(SPLASH_MS_ENV, "fast")]));
        assert!(matches!(
            result,
            Err(ConfigError::EnvParse { ref var, .. }) if var == SPLASH_MS_ENV
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_with(vars(&[(CONFIG_PATH_ENV, "/nonexistent/inkfolio.toml")]));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_error_converts_to_common_error() {
        let err: InkfolioError = ConfigError::Validation {
            field: "logging.level".to_string(),
            message: "bad".to_string(),
        }
        .into();
        assert!(matches!(err, InkfolioError::Config { source: Some(_), .. }));
        assert!(err.to_string().contains("logging.level"));
    }
}
