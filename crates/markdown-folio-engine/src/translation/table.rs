use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use log::debug;

use super::{TranslationError, csv};

/// Header text required in the first column of a translation file.
pub const KEY_HEADER: &str = "key";

/// Key → text mapping for one language.
///
/// Keys iterate in the order they were inserted, which for a loaded file is
/// row order. Substitution walks keys in this order, so it is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    code: String,
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LanguageTable {
    /// Creates an empty table; `code` is stored upper-cased.
    pub fn new(code: &str) -> Self {
        Self {
            code: code.trim().to_uppercase(),
            ..Self::default()
        }
    }

    /// Builds a table from key/value pairs.
    pub fn from_pairs<K, V>(code: &str, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new(code);
        for (key, value) in pairs {
            table.insert(key, value);
        }
        table
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Inserts or replaces a key. Replacing keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every language loaded from one translation file, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSet {
    languages: Vec<LanguageTable>,
}

impl TranslationSet {
    /// Loads a translation CSV from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TranslationError> {
        let path = path.as_ref();
        if path.extension().and_then(OsStr::to_str) != Some("csv") {
            return Err(TranslationError::NotCsv(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(TranslationError::NotFound(path.to_path_buf()));
        }

        let src = fs::read_to_string(path).map_err(|source| TranslationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_csv(&src)?;
        debug!(
            "Loaded translations for {} from {}",
            set.codes().collect::<Vec<_>>().join(", "),
            path.display()
        );
        Ok(set)
    }

    /// Parses translation CSV text.
    pub fn from_csv(src: &str) -> Result<Self, TranslationError> {
        let mut records = csv::parse_records(src)?.into_iter();

        let header = records.next().ok_or(TranslationError::MissingHeaders)?;
        let has_key_header = header
            .fields
            .first()
            .is_some_and(|cell| cell.trim().eq_ignore_ascii_case(KEY_HEADER));
        if !has_key_header {
            return Err(TranslationError::MissingKeyHeader);
        }
        if header.fields.len() == 1 {
            return Err(TranslationError::NoLanguages);
        }

        let mut languages: Vec<LanguageTable> = Vec::with_capacity(header.fields.len() - 1);
        for code in &header.fields[1..] {
            let table = LanguageTable::new(code);
            if languages.iter().any(|l| l.code() == table.code()) {
                return Err(TranslationError::DuplicateLanguage(table.code));
            }
            languages.push(table);
        }

        let mut seen = HashSet::new();
        for (n, record) in records.enumerate() {
            let row = n + 2;
            let cells = record.fields.len();
            let mut fields = record.fields.into_iter();
            let key = fields.next().unwrap_or_default();

            if !seen.insert(key.clone()) {
                return Err(TranslationError::DuplicateKey { row, key });
            }
            if cells > header.fields.len() {
                return Err(TranslationError::TooManyCells {
                    row,
                    key,
                    cells,
                    headers: header.fields.len(),
                });
            }

            for (table, value) in languages.iter_mut().zip(fields) {
                table.insert(key.as_str(), value);
            }
        }

        Ok(Self { languages })
    }

    /// Looks up a language by code, ignoring case.
    pub fn language(&self, code: &str) -> Result<&LanguageTable, TranslationError> {
        let wanted = code.trim().to_uppercase();
        self.languages
            .iter()
            .find(|l| l.code() == wanted)
            .ok_or_else(|| TranslationError::UnknownLanguage(code.to_string()))
    }

    /// The first language column of the file.
    pub fn default_language(&self) -> Option<&LanguageTable> {
        self.languages.first()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(LanguageTable::code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::create_test_dir;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
Key,en,de
// greetings
HELLO,Hello,Hallo
BYE,Goodbye,\"Tschüss, bis bald\"
ONLY_EN,English only
";

    #[test]
    fn loads_languages_in_header_order() {
        let set = TranslationSet::from_csv(SAMPLE).unwrap();
        assert_eq!(set.codes().collect::<Vec<_>>(), vec!["EN", "DE"]);
        assert_eq!(set.default_language().unwrap().code(), "EN");
    }

    #[test]
    fn values_are_per_language() {
        let set = TranslationSet::from_csv(SAMPLE).unwrap();
        let de = set.language("de").unwrap();
        assert_eq!(de.get("HELLO"), Some("Hallo"));
        assert_eq!(de.get("BYE"), Some("Tschüss, bis bald"));
        assert_eq!(de.get("ONLY_EN"), None);
        assert_eq!(set.language("EN").unwrap().get("ONLY_EN"), Some("English only"));
    }

    #[test]
    fn keys_keep_row_order() {
        let set = TranslationSet::from_csv(SAMPLE).unwrap();
        let keys: Vec<_> = set.language("en").unwrap().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["HELLO", "BYE", "ONLY_EN"]);
    }

    #[test]
    fn unknown_language_is_an_error() {
        let set = TranslationSet::from_csv(SAMPLE).unwrap();
        let err = set.language("fr").unwrap_err();
        assert_eq!(err.to_string(), "Could not find a language called fr");
    }

    #[test]
    fn empty_file_has_no_headers() {
        let err = TranslationSet::from_csv("// only a comment\n").unwrap_err();
        assert!(matches!(err, TranslationError::MissingHeaders));
    }

    #[test]
    fn spreadsheet_export_with_byte_order_mark_loads() {
        let set = TranslationSet::from_csv("\u{feff}key,EN\nHELLO,Hi\n").unwrap();
        assert_eq!(set.language("en").unwrap().get("HELLO"), Some("Hi"));
    }

    #[test]
    fn first_header_must_be_key() {
        let err = TranslationSet::from_csv("id,EN\nA,a").unwrap_err();
        assert!(matches!(err, TranslationError::MissingKeyHeader));
    }

    #[test]
    fn header_needs_a_language() {
        let err = TranslationSet::from_csv("KEY\nA").unwrap_err();
        assert!(matches!(err, TranslationError::NoLanguages));
    }

    #[test]
    fn repeated_language_is_an_error() {
        let err = TranslationSet::from_csv("key,EN,en\n").unwrap_err();
        assert!(matches!(err, TranslationError::DuplicateLanguage(code) if code == "EN"));
    }

    #[test]
    fn duplicate_key_reports_row() {
        let err = TranslationSet::from_csv("key,EN\nA,a\nB,b\nA,again").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Translation row 4 (key A) is a duplicate, that key already exists"
        );
    }

    #[test]
    fn too_many_cells_reports_counts() {
        let err = TranslationSet::from_csv("key,EN\nA,a,extra").unwrap_err();
        assert!(matches!(
            err,
            TranslationError::TooManyCells {
                row: 2,
                cells: 3,
                headers: 2,
                ..
            }
        ));
    }

    #[test]
    fn load_rejects_non_csv_extension() {
        let dir = create_test_dir();
        let path = dir.path().join("strings.txt");
        std::fs::write(&path, "key,EN").unwrap();
        assert!(matches!(
            TranslationSet::load(&path),
            Err(TranslationError::NotCsv(_))
        ));
    }

    #[test]
    fn load_rejects_missing_file() {
        let dir = create_test_dir();
        assert!(matches!(
            TranslationSet::load(dir.path().join("missing.csv")),
            Err(TranslationError::NotFound(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let dir = create_test_dir();
        let path = dir.path().join("strings.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let set = TranslationSet::load(&path).unwrap();
        assert_eq!(set.language("en").unwrap().len(), 3);
    }
}
