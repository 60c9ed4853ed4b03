//! # Inkfolio
//!
//! Command line front end for the bilingual Inkfolio portfolio.
//!
//! Loads configuration, starts a site session with the remembered
//! language and renders the page, or switches and reports the language.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;
pub mod render;

pub use app::*;
pub use cli::*;
pub use error::*;
