//! Test utilities and shared test helpers for Inkfolio.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal site configuration as TOML.
    pub fn minimal_config_toml() -> &'static str {
        r#"
[preferences]
path = "prefs/preferences.toml"
"#
    }

    /// A site configuration with every section filled in.
    pub fn full_config_toml() -> &'static str {
        concat!(
            "[preferences]\n",
            "path = \"state/preferences.toml\"\n",
            "\n",
            "[splash]\n",
            "delay_ms = 250\n",
            "\n",
            "[logging]\n",
            "level = \"debug\"\n",
            "json = true\n",
            "file = \"inkfolio.log\"\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for arbitrary (often invalid) raw values found in preference storage.
    pub fn raw_preference_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("EN".to_string()),
            Just(" jp ".to_string()),
            Just("ja".to_string()),
            Just("fr".to_string()),
            r"[a-zA-Z]{0,4}",
            any::<String>(),
        ]
    }

    /// Strategy for arbitrary user-entered form text, including Japanese.
    pub fn form_text_strategy() -> impl Strategy<Value = String> {
        prop_oneof![r"[a-zA-Z0-9 @.]{0,40}", r"[ぁ-んァ-ン一-龯 ]{0,20}"]
    }
}
