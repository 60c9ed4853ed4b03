//! Per-language parallel values

use crate::language::LanguageCode;
use serde::{Deserialize, Serialize};

/// One value for every supported language
///
/// Selection is an exhaustive `match`, so a value can never be missing
/// for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Localized<T> {
    /// English value
    pub en: T,
    /// Japanese value
    pub jp: T,
}

impl<T> Localized<T> {
    /// Create a value from its translations
    pub const fn new(en: T, jp: T) -> Self {
        Self { en, jp }
    }

    /// Value for the given language
    pub const fn get(&self, language: LanguageCode) -> &T {
        match language {
            LanguageCode::En => &self.en,
            LanguageCode::Jp => &self.jp,
        }
    }

    /// Build a value by calling `f` once per language
    pub fn from_fn(mut f: impl FnMut(LanguageCode) -> T) -> Self {
        Self {
            en: f(LanguageCode::En),
            jp: f(LanguageCode::Jp),
        }
    }

    /// Build a value by calling a fallible `f` once per language
    pub fn try_from_fn<E>(mut f: impl FnMut(LanguageCode) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            en: f(LanguageCode::En)?,
            jp: f(LanguageCode::Jp)?,
        })
    }

    /// Transform every translation
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Localized<U> {
        Localized {
            en: f(self.en),
            jp: f(self.jp),
        }
    }

    /// Iterate over `(language, value)` pairs in [`LanguageCode::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (LanguageCode, &T)> {
        LanguageCode::ALL
            .into_iter()
            .map(move |language| (language, self.get(language)))
    }
}

impl Localized<&'static str> {
    /// Owned copy of the text for the given language
    #[must_use]
    pub fn text(&self, language: LanguageCode) -> String {
        (*self.get(language)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: Localized<&str> = Localized::new("Hello", "こんにちは");

    #[test]
    fn test_get_selects_language() {
        assert_eq!(*GREETING.get(LanguageCode::En), "Hello");
        assert_eq!(*GREETING.get(LanguageCode::Jp), "こんにちは");
        assert_eq!(GREETING.text(LanguageCode::Jp), "こんにちは");
    }

    #[test]
    fn test_from_fn_visits_each_language_once() {
        let mut seen = Vec::new();
        let codes = Localized::from_fn(|language| {
            seen.push(language);
            language.code()
        });
        assert_eq!(seen, LanguageCode::ALL);
        assert_eq!(codes, Localized::new("en", "jp"));
    }

    #[test]
    fn test_try_from_fn_stops_on_error() {
        let result: Result<Localized<u8>, String> = Localized::try_from_fn(|language| match language {
            LanguageCode::En => Ok(1),
            LanguageCode::Jp => Err("no jp".to_string()),
        });
        assert_eq!(result.unwrap_err(), "no jp");
    }

    #[test]
    fn test_iter_follows_toggle_order() {
        let pairs: Vec<_> = GREETING.iter().map(|(language, text)| (language, *text)).collect();
        assert_eq!(
            pairs,
            vec![(LanguageCode::En, "Hello"), (LanguageCode::Jp, "こんにちは")]
        );
    }

    #[test]
    fn test_map() {
        assert_eq!(GREETING.map(str::len), Localized::new(5, 15));
    }
}
