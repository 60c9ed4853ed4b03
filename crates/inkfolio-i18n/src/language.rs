//! Supported language codes

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Languages the site can be displayed in
///
/// The set is closed: every `match` on it is exhaustive, so adding a
/// language is caught at compile time wherever per-language data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English
    En,
    /// Japanese
    Jp,
}

impl LanguageCode {
    /// All supported languages, in toggle order
    pub const ALL: [Self; 2] = [Self::En, Self::Jp];

    /// Primary language, also used when no preference is stored
    pub const PRIMARY: Self = Self::En;

    /// Short code used in storage and resource paths
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Jp => "jp",
        }
    }

    /// Name of the language written in that language
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Jp => "日本語",
        }
    }

    /// BCP 47 identifier used for Fluent plural and number rules
    const fn bcp47(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Jp => "ja-JP",
        }
    }

    /// Position of this language in [`Self::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::En => 0,
            Self::Jp => 1,
        }
    }

    /// The language that follows this one in toggle order
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Parse a stored or user supplied code
    ///
    /// Only the known codes are accepted, ignoring surrounding whitespace
    /// and case. Anything else yields `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    /// Convert to a unic-langid identifier
    pub fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.bcp47()
            .parse()
            .map_err(|e| I18nError::InvalidLanguageId(format!("{}: {e}", self.bcp47())))
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnknownLanguage(s.to_string()))
    }
}
