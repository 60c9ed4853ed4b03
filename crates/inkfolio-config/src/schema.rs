//! Configuration schema for the Inkfolio site.

use inkfolio_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Language preference storage.
    pub preferences: PreferencesConfig,
    /// Splash screen shown before the first render.
    pub splash: SplashConfig,
    /// Logging output.
    pub logging: LoggingSettings,
}

/// Language preference storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// File holding the persisted language preference.
    pub path: PathBuf,
}

/// Splash screen configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Delay before the page is first shown, in milliseconds.
    pub delay_ms: u64,
}

impl SplashConfig {
    /// Delay as a [`Duration`].
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of `trace`, `debug`, `info`, `warn` or `error`.
    pub level: String,
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
    /// Write to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl LoggingSettings {
    /// Convert to the shared logging setup.
    #[must_use]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json,
            file_path: self.file.as_ref().map(|path| path.display().to_string()),
            ..LoggingConfig::default()
        }
    }
}
