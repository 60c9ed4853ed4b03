//! Fluent resources embedded at compile time
//!
//! `build.rs` has already checked these files for syntax errors and message
//! parity before they are included here.

use crate::language::LanguageCode;

/// Name of the Fluent file inside each `locales/<code>/` directory
pub const RESOURCE_FILE: &str = "main.ftl";

/// Embedded Fluent source for a language
#[must_use]
pub const fn embedded_source(language: LanguageCode) -> &'static str {
    match language {
        LanguageCode::En => include_str!("../../../locales/en/main.ftl"),
        LanguageCode::Jp => include_str!("../../../locales/jp/main.ftl"),
    }
}

/// Embedded sources for every supported language
#[must_use]
pub fn embedded_sources() -> Vec<(LanguageCode, &'static str)> {
    LanguageCode::ALL
        .into_iter()
        .map(|language| (language, embedded_source(language)))
        .collect()
}
