use std::path::PathBuf;

/// Failures while loading a translation table. All of them are fatal: no
/// document is rendered with a partially loaded table.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Invalid translation file, expected a .csv file: {0}")]
    NotCsv(PathBuf),
    #[error("Invalid translation file path: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read translation file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not load the translation headers")]
    MissingHeaders,
    #[error("Unterminated quoted field starting on line {line}")]
    Malformed { line: usize },
    #[error("No key found in the first translation header cell")]
    MissingKeyHeader,
    #[error("No languages found in the translation headers")]
    NoLanguages,
    #[error("Language {0} appears more than once in the translation headers")]
    DuplicateLanguage(String),
    #[error("Translation row {row} (key {key}) is a duplicate, that key already exists")]
    DuplicateKey { row: usize, key: String },
    #[error(
        "Translation row {row} (key {key}), has {cells} cells but only {headers} header cells exist"
    )]
    TooManyCells {
        row: usize,
        key: String,
        cells: usize,
        headers: usize,
    },
    #[error("Could not find a language called {0}")]
    UnknownLanguage(String),
}
