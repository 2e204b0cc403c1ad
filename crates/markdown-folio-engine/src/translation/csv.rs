//! Minimal reader for the translation CSV dialect.
//!
//! Comma separated, `"` quoted fields with `""` escapes, quoted fields may
//! span lines, unquoted fields are trimmed, `//` lines are comments and blank
//! lines are skipped.

use std::mem;

use super::TranslationError;

const DELIMITER: char = ',';
const QUOTE: char = '"';
const COMMENT: &str = "//";
const BOM: char = '\u{feff}';

/// One logical CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line the record starts on.
    pub line: usize,
    pub fields: Vec<String>,
}

pub fn parse_records(src: &str) -> Result<Vec<Record>, TranslationError> {
    let src = src.strip_prefix(BOM).unwrap_or(src);
    let mut records = Vec::new();
    let mut pending: Option<RecordReader> = None;

    for (idx, line) in src.lines().enumerate() {
        let mut reader = match pending.take() {
            Some(mut reader) => {
                // Still inside a quoted field: the line break is part of it.
                reader.field.push('\n');
                reader
            }
            None => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
                    continue;
                }
                RecordReader::new(idx + 1)
            }
        };

        if reader.feed(line) {
            pending = Some(reader);
        } else {
            records.push(reader.finish());
        }
    }

    if let Some(reader) = pending {
        return Err(TranslationError::Malformed { line: reader.line });
    }
    Ok(records)
}

struct RecordReader {
    line: usize,
    fields: Vec<String>,
    field: String,
    in_quotes: bool,
    quoted: bool,
}

impl RecordReader {
    fn new(line: usize) -> Self {
        Self {
            line,
            fields: Vec::new(),
            field: String::new(),
            in_quotes: false,
            quoted: false,
        }
    }

    /// Consumes one physical line. Returns true if a quoted field is still open.
    fn feed(&mut self, line: &str) -> bool {
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            if self.in_quotes {
                if c != QUOTE {
                    self.field.push(c);
                } else if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    self.field.push(QUOTE);
                } else {
                    self.in_quotes = false;
                }
                continue;
            }

            match c {
                DELIMITER => self.end_field(),
                QUOTE if !self.quoted && self.field.trim().is_empty() => {
                    self.field.clear();
                    self.in_quotes = true;
                    self.quoted = true;
                }
                c if self.quoted && c.is_whitespace() => {}
                c => self.field.push(c),
            }
        }
        self.in_quotes
    }

    fn end_field(&mut self) {
        let field = mem::take(&mut self.field);
        let value = if self.quoted {
            field
        } else {
            field.trim().to_string()
        };
        self.fields.push(value);
        self.quoted = false;
    }

    fn finish(mut self) -> Record {
        self.end_field();
        Record {
            line: self.line,
            fields: self.fields,
        }
    }
}
