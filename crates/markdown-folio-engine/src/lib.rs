pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod translation;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Page, minify_css};
pub use io::*;
pub use models::source_file::*;
pub use parsing::{render_document_set, render_lines, render_sources};
pub use translation::{LanguageTable, Resolver, TranslationError, TranslationSet};
