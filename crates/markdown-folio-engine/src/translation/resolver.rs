use std::borrow::Cow;

use crate::parsing::inline::kinds::ErrorMark;

use super::LanguageTable;

/// Substitutes translation keys using the active language, if any.
///
/// Without a table every operation is the identity, so rendering without a
/// translation file needs no special casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<'t> {
    table: Option<&'t LanguageTable>,
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t LanguageTable) -> Self {
        Self { table: Some(table) }
    }

    /// A resolver that never translates.
    pub fn identity() -> Self {
        Self { table: None }
    }

    pub fn table(&self) -> Option<&'t LanguageTable> {
        self.table
    }

    /// Looks up `key` directly. Missing keys (or no table at all) yield an
    /// inline error marker naming the key.
    pub fn get(&self, key: &str) -> String {
        self.table
            .and_then(|table| table.get(key))
            .map(str::to_string)
            .unwrap_or_else(|| ErrorMark::render(key))
    }

    /// Translates `raw`.
    ///
    /// Text that is exactly a key is replaced by its value. Otherwise each key
    /// is replaced wherever it occurs and is not followed by a word
    /// character; the character before an occurrence is not checked.
    pub fn apply<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        let Some(table) = self.table else {
            return Cow::Borrowed(raw);
        };
        if let Some(value) = table.get(raw) {
            return Cow::Owned(value.to_string());
        }

        let mut text = Cow::Borrowed(raw);
        for (key, value) in table.iter() {
            if key.is_empty() {
                continue;
            }
            let mut from = 0;
            while let Some(rel) = text[from..].find(key) {
                let at = from + rel;
                let end = at + key.len();
                if text[end..].chars().next().is_some_and(is_word_char) {
                    from = end;
                    continue;
                }
                text.to_mut().replace_range(at..end, value);
                from = at + value.len();
            }
        }
        text
    }

    /// Translates a whole paragraph line, or drops it.
    ///
    /// A line that is exactly a key whose value is empty in the active
    /// language is dropped (`None`). Anything else is kept and translated as
    /// by [`Resolver::apply`].
    pub fn line_filter<'a>(&self, raw: &'a str) -> Option<Cow<'a, str>> {
        if let Some(table) = self.table
            && table.get(raw).is_some_and(str::is_empty)
        {
            return None;
        }
        Some(self.apply(raw))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
