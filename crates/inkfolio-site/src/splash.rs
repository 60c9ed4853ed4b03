//! Splash screen shown once before the first render.

use crate::selector::Localized;
use inkfolio_config::{SiteConfig, DEFAULT_SPLASH_DELAY_MS};
use inkfolio_i18n::LanguageCode;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Default splash duration.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(DEFAULT_SPLASH_DELAY_MS);

/// Loading text per language.
pub const LOADING_TEXT: Localized<&str> = Localized::new("Preparing Canvas...", "キャンバスを準備中...");

/// Fire-once delay before the page is shown
#[derive(Debug, Clone)]
pub struct Splash {
    deadline: Instant,
    delay: Duration,
}

impl Splash {
    /// Start the splash timer now
    #[must_use]
    pub fn start(delay: Duration) -> Self {
        Self {
            deadline: Instant::now() + delay,
            delay,
        }
    }

    /// Start the splash timer with the configured delay
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::start(config.splash.delay())
    }

    /// Configured delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the delay has elapsed
    #[must_use]
    pub fn is_ready(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Time left before the page may be shown
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Wait until the delay has elapsed; returns at once afterwards
    pub async fn wait(&self) {
        if !self.is_ready() {
            debug!(remaining_ms = self.remaining().as_millis(), "Waiting for splash");
            tokio::time::sleep_until(self.deadline).await;
        }
    }

    /// Loading text for a language
    #[must_use]
    pub fn loading_text(language: LanguageCode) -> &'static str {
        LOADING_TEXT.get(language)
    }
}

impl Default for Splash {
    fn default() -> Self {
        Self::start(DEFAULT_SPLASH_DELAY)
    }
}
