//! # Inkfolio Site
//!
//! Language context and page state for the Inkfolio portfolio.
//!
//! - [`LanguageContext`] holds the active language and its resolved
//!   strings, persists changes and notifies subscribers
//! - [`selector`] projects static per-language tables into views
//! - [`sections`] holds the content and local state of each page section
//! - [`Site`] renders the whole page from one language snapshot
//! - [`Splash`] delays the first render once
//!
//! # Example
//!
//! ```rust
//! use inkfolio_config::MemoryPreferenceStore;
//! use inkfolio_i18n::{LanguageCode, LocaleCatalog};
//! use inkfolio_site::Site;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(LocaleCatalog::load()?);
//! let site = Site::new(catalog, Arc::new(MemoryPreferenceStore::new()));
//!
//! site.set_language(LanguageCode::Jp);
//! println!("{}", site.page().hero.title);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod sections;
pub mod selector;
pub mod site;
pub mod splash;

pub use context::{LanguageContext, LanguageSnapshot, SubscriptionId};
pub use selector::{select, Localize, Localized};
pub use site::{PageView, Site};
pub use splash::Splash;
