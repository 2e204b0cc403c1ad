//! # Translations
//!
//! Loading of the key → text CSV and substitution of keys in document text.
//!
//! A [`TranslationSet`] holds every language column of a file and is
//! immutable once loaded. Rendering borrows one [`LanguageTable`] from it
//! through a [`Resolver`], so several languages can be rendered from the
//! same set in one process.

mod csv;
mod error;
mod resolver;
mod table;

pub use error::TranslationError;
pub use resolver::Resolver;
pub use table::{KEY_HEADER, LanguageTable, TranslationSet};
