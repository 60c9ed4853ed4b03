//! Locale catalog
//!
//! Parses the Fluent resources once and keeps a resolved [`LocaleBundle`]
//! per language. Resolution afterwards is a plain lookup that cannot fail.

use crate::bundle::{LocaleBundle, MessageSource};
use crate::error::{I18nError, I18nResult};
use crate::language::LanguageCode;
use crate::localized::Localized;
use crate::resource::embedded_sources;
use fluent_bundle::{FluentBundle, FluentResource};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves message ids against one Fluent bundle, remembering misses
struct FluentSource<'a> {
    language: LanguageCode,
    bundle: &'a FluentBundle<FluentResource>,
    missing: Vec<String>,
}

impl MessageSource for FluentSource<'_> {
    fn message(&mut self, key: &'static str) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|msg| msg.value()) else {
            warn!(
                locale = %self.language,
                key,
                "Message not found, falling back to key"
            );
            self.missing.push(key.to_string());
            return key.to_string();
        };

        let mut errors = Vec::new();
        let text = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            warn!(
                locale = %self.language,
                key,
                errors = ?errors,
                "Message formatted with errors"
            );
        }
        text.into_owned()
    }
}

#[derive(Debug)]
struct CatalogEntry {
    bundle: Arc<LocaleBundle>,
    missing: Vec<String>,
}

static SHARED: OnceCell<Arc<LocaleCatalog>> = OnceCell::new();

/// Resolved bundles for every supported language
#[derive(Debug)]
pub struct LocaleCatalog {
    entries: Localized<CatalogEntry>,
}

impl LocaleCatalog {
    /// Load the embedded resources
    ///
    /// Messages missing from a resource degrade to their id and are
    /// reported by [`Self::missing_keys`].
    pub fn load() -> I18nResult<Self> {
        Self::from_sources(&embedded_sources())
    }

    /// Process-wide catalog of the embedded resources, loaded on first use
    pub fn shared() -> I18nResult<Arc<Self>> {
        SHARED
            .get_or_try_init(|| Self::load().map(Arc::new))
            .map(Arc::clone)
    }

    /// Load the embedded resources, rejecting any incomplete bundle
    pub fn load_strict() -> I18nResult<Self> {
        let catalog = Self::load()?;
        catalog.ensure_complete()?;
        Ok(catalog)
    }

    /// Build a catalog from Fluent sources keyed by language
    ///
    /// Every supported language needs a source, otherwise
    /// [`I18nError::MissingResource`] is returned.
    pub fn from_sources<S: AsRef<str>>(sources: &[(LanguageCode, S)]) -> I18nResult<Self> {
        let entries = Localized::try_from_fn(|language| {
            let source = sources
                .iter()
                .find(|(code, _)| *code == language)
                .map(|(_, source)| source.as_ref())
                .ok_or_else(|| I18nError::MissingResource {
                    locale: language.code().to_string(),
                })?;
            build_entry(language, source)
        })?;

        let catalog = Self { entries };
        info!(
            languages = LanguageCode::ALL.len(),
            complete = catalog.is_complete(),
            "Locale catalog loaded"
        );
        Ok(catalog)
    }

    /// Bundle for a language
    #[must_use]
    pub fn resolve(&self, language: LanguageCode) -> Arc<LocaleBundle> {
        Arc::clone(&self.entries.get(language).bundle)
    }

    /// Message ids that were missing from a language's resource
    #[must_use]
    pub fn missing_keys(&self, language: LanguageCode) -> &[String] {
        &self.entries.get(language).missing
    }

    /// Whether every language resolved every message
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, entry)| entry.missing.is_empty())
    }

    /// Fail with the first incomplete language, in toggle order
    pub fn ensure_complete(&self) -> I18nResult<()> {
        match self.entries.iter().find(|(_, entry)| !entry.missing.is_empty()) {
            Some((language, entry)) => Err(I18nError::IncompleteBundle {
                locale: language.code().to_string(),
                keys: entry.missing.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn build_entry(language: LanguageCode, source: &str) -> I18nResult<CatalogEntry> {
    let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
        I18nError::FluentParse {
            locale: language.code().to_string(),
            errors: errors.iter().map(|e| format!("{e:?}")).collect(),
        }
    })?;

    let mut bundle: FluentBundle<FluentResource> =
        FluentBundle::new(vec![language.to_language_identifier()?]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::BundleCreation {
            locale: language.code().to_string(),
            errors: errors.iter().map(|e| format!("{e:?}")).collect(),
        })?;

    let mut fluent = FluentSource {
        language,
        bundle: &bundle,
        missing: Vec::new(),
    };
    let resolved = LocaleBundle::build(&mut fluent);
    let missing = fluent.missing;

    debug!(
        locale = %language,
        missing = missing.len(),
        "Resolved locale bundle"
    );

    Ok(CatalogEntry {
        bundle: Arc::new(resolved),
        missing,
    })
}
