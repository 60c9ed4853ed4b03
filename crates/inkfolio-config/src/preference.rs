//! Persisted language preference.
//!
//! A store holds at most one value, the code of the language the visitor
//! last chose. Reading never fails: anything missing, unreadable or
//! unrecognized reads as "no preference" and the caller picks a default.

use inkfolio_common::InkfolioError;
use inkfolio_i18n::LanguageCode;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key of the preferred language.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Errors raised when writing a preference
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// File system failure
    #[error("Failed to write preference file '{}': {source}", .path.display())]
    Io {
        /// Preference file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Preference document could not be encoded
    #[error("Failed to encode preference: {0}")]
    Encode(#[from] toml::ser::Error),

    /// Storage refused the write
    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),
}

impl From<PreferenceError> for InkfolioError {
    fn from(err: PreferenceError) -> Self {
        let message = err.to_string();
        Self::preference_with_source(message, err)
    }
}

/// Durable key-value storage for the language preference
pub trait PreferenceStore: Send + Sync {
    /// Stored language, or `None` if absent or not a recognized code.
    fn load(&self) -> Option<LanguageCode>;

    /// Overwrite the stored language.
    fn save(&self, language: LanguageCode) -> Result<(), PreferenceError>;
}

fn parse_stored(raw: &str) -> Option<LanguageCode> {
    let language = LanguageCode::from_code(raw);
    if language.is_none() {
        warn!(value = raw, "Ignoring unrecognized stored language");
    }
    language
}

/// Preference kept in a small TOML file
///
/// ```toml
/// preferredLanguage = "jp"
/// ```
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store backed by the file at `path`; the file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the preference file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw stored value, without checking that it is a known code.
    #[must_use]
    pub fn read_raw(&self) -> Option<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No preference file");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read preference file");
                return None;
            }
        };

        let table: toml::Table = match content.parse() {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Preference file is not valid TOML");
                return None;
            }
        };

        table.get(PREFERRED_LANGUAGE_KEY).map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    fn io_error(&self, source: io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<LanguageCode> {
        self.read_raw().as_deref().and_then(parse_stored)
    }

    fn save(&self, language: LanguageCode) -> Result<(), PreferenceError> {
        let mut table = toml::Table::new();
        table.insert(
            PREFERRED_LANGUAGE_KEY.to_string(),
            toml::Value::String(language.code().to_string()),
        );
        let content = toml::to_string(&table)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        // Write beside the target and rename over it.
        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| self.io_error(e))?;
        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        debug!(path = %self.path.display(), language = %language, "Saved language preference");
        Ok(())
    }
}

/// Preference held in memory, for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    raw: Mutex<Option<String>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryPreferenceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with an arbitrary, possibly invalid, raw value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
            ..Self::default()
        }
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw stored value.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().clone()
    }

    /// Number of successful writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<LanguageCode> {
        self.raw.lock().as_deref().and_then(parse_stored)
    }

    fn save(&self, language: LanguageCode) -> Result<(), PreferenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PreferenceError::Unavailable(
                "writes are disabled".to_string(),
            ));
        }
        *self.raw.lock() = Some(language.code().to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.load(), None);

        store.save(LanguageCode::Jp).unwrap();
        assert_eq!(store.load(), Some(LanguageCode::Jp));
        assert_eq!(store.raw().as_deref(), Some("jp"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_memory_corrupted_value() {
        assert_eq!(MemoryPreferenceStore::with_raw("klingon").load(), None);
        assert_eq!(MemoryPreferenceStore::with_raw("").load(), None);
        assert_eq!(MemoryPreferenceStore::with_raw(" JP").load(), Some(LanguageCode::Jp));
    }

    #[test]
    fn test_memory_failing_writes_keep_old_value() {
        let store = MemoryPreferenceStore::with_raw("en");
        store.set_fail_writes(true);

        let err = store.save(LanguageCode::Jp).unwrap_err();
        assert!(matches!(err, PreferenceError::Unavailable(_)));
        assert_eq!(store.load(), Some(LanguageCode::En));
        assert_eq!(store.write_count(), 0);

        store.set_fail_writes(false);
        store.save(LanguageCode::Jp).unwrap();
        assert_eq!(store.load(), Some(LanguageCode::Jp));
    }

    #[test]
    fn test_error_converts_to_common_error() {
        let err: InkfolioError = PreferenceError::Unavailable("offline".to_string()).into();
        assert!(matches!(err, InkfolioError::Preference { source: Some(_), .. }));
    }
}
