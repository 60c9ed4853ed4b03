//! Page model
//!
//! [`Site`] ties the language context to the state of every section and
//! renders the whole page for the current language.

use crate::context::{LanguageContext, LanguageSnapshot};
use crate::sections::{
    about, footer, hero, AboutView, CommissionState, CommissionsView, ContactState, ContactView,
    FanWallState, FanWallView, FooterView, GalleryState, GalleryView, HeaderState, HeaderView,
    HeroView,
};
use inkfolio_common::Result;
use inkfolio_config::{FilePreferenceStore, PreferenceStore, SiteConfig};
use inkfolio_i18n::{LanguageCode, LocaleCatalog};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Fully rendered page for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub language: LanguageCode,
    pub header: HeaderView,
    pub hero: HeroView,
    pub gallery: GalleryView,
    pub about: AboutView,
    pub commissions: CommissionsView,
    pub fan_wall: FanWallView,
    pub contact: ContactView,
    pub footer: FooterView,
}

/// A visitor session: language context plus section state
#[derive(Debug)]
pub struct Site {
    context: Arc<LanguageContext>,
    /// Header menu state
    pub header: HeaderState,
    /// Gallery filter and likes
    pub gallery: GalleryState,
    /// Commission selection and form
    pub commissions: CommissionState,
    /// Fan wall likes
    pub fan_wall: FanWallState,
    /// Contact form
    pub contact: ContactState,
}

impl Site {
    /// Start a session with fresh section state
    pub fn new(catalog: Arc<LocaleCatalog>, store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_context(Arc::new(LanguageContext::new(catalog, store)))
    }

    /// Start a session from configuration
    ///
    /// Loads the embedded locale catalog and keeps the language preference
    /// in the configured file.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let catalog = LocaleCatalog::shared()?;
        let store = Arc::new(FilePreferenceStore::new(&config.preferences.path));
        let site = Self::new(catalog, store);

        info!(
            language = %site.language(),
            preferences = %config.preferences.path.display(),
            "Site session started"
        );
        Ok(site)
    }

    /// Start a session on an existing context
    #[must_use]
    pub fn with_context(context: Arc<LanguageContext>) -> Self {
        Self {
            context,
            header: HeaderState::default(),
            gallery: GalleryState::default(),
            commissions: CommissionState::default(),
            fan_wall: FanWallState::default(),
            contact: ContactState::default(),
        }
    }

    /// Shared language context
    #[must_use]
    pub fn context(&self) -> &Arc<LanguageContext> {
        &self.context
    }

    /// Active language
    #[must_use]
    pub fn language(&self) -> LanguageCode {
        self.context.language()
    }

    /// Switch language; section state is untouched
    pub fn set_language(&self, language: LanguageCode) -> bool {
        self.context.set_language(language)
    }

    /// Switch to the next language
    pub fn toggle_language(&self) -> LanguageCode {
        self.context.toggle_language()
    }

    /// Render every section from a single snapshot
    #[must_use]
    pub fn page(&self) -> PageView {
        let snapshot = self.context.current();
        self.render(&snapshot)
    }

    fn render(&self, snapshot: &LanguageSnapshot) -> PageView {
        PageView {
            language: snapshot.language(),
            header: self.header.view(snapshot),
            hero: hero::view(snapshot),
            gallery: self.gallery.view(snapshot),
            about: about::view(snapshot),
            commissions: self.commissions.view(snapshot),
            fan_wall: self.fan_wall.view(snapshot),
            contact: self.contact.view(snapshot),
            footer: footer::view(snapshot),
        }
    }
}
