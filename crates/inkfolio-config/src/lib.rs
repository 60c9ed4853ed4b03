//! # Inkfolio Config
//!
//! Site configuration and language preference storage for Inkfolio.
//!
//! Configuration is read from TOML with environment variable overrides and
//! validated before use. The preference store persists the visitor's
//! chosen language between sessions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod preference;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use preference::*;
pub use schema::*;
