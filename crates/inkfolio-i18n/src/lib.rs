//! Internationalization support for Inkfolio
//!
//! This crate owns everything language related that does not depend on
//! page state:
//!
//! - The closed set of supported languages ([`LanguageCode`])
//! - Fluent resources under `locales/`, validated by `build.rs` and
//!   embedded at compile time
//! - The [`LocaleCatalog`], which resolves one typed [`LocaleBundle`] per
//!   language up front
//! - [`Localized`], a per-language record used by content tables
//!
//! # Example
//!
//! ```rust
//! use inkfolio_i18n::{LanguageCode, LocaleCatalog};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = LocaleCatalog::load_strict()?;
//! let bundle = catalog.resolve(LanguageCode::Jp);
//! println!("{}", bundle.hero.title);
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod catalog;
pub mod error;
pub mod language;
pub mod localized;
pub mod resource;

pub use bundle::LocaleBundle;
pub use catalog::LocaleCatalog;
pub use error::{I18nError, I18nResult};
pub use language::LanguageCode;
pub use localized::Localized;
pub use resource::{embedded_source, embedded_sources};
