/// A cursor for character-by-character inline rendering.
///
/// Indexes are byte offsets into `s`. All delimiters the renderer cares
/// about are ASCII, so every position the cursor stops at is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being rendered.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Moves the cursor to `pos`, clamped to the end of the string.
    pub fn jump_to(&mut self, pos: usize) {
        self.i = pos.min(self.s.len());
    }
}

/// Text captured up to a closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// The captured text, delimiters excluded.
    pub text: &'a str,
    /// Byte index just past the closing delimiter, or `s.len()` when the
    /// delimiter was never found.
    pub next: usize,
}

const ESCAPE: u8 = b'\\';

/// Captures text from `start` up to the first `close` not preceded by a backslash.
///
/// An unterminated section captures the rest of the string.
pub fn section_until_char(s: &str, start: usize, close: char) -> Section<'_> {
    debug_assert!(close.is_ascii());
    let start = start.min(s.len());
    let b = s.as_bytes();
    let close = close as u8;

    for i in start..b.len() {
        if b[i] == close && (i == 0 || b[i - 1] != ESCAPE) {
            return Section {
                text: &s[start..i],
                next: i + 1,
            };
        }
    }

    Section {
        text: &s[start..],
        next: s.len(),
    }
}

/// Captures text from `start` up to the first `close` sequence not preceded
/// by a backslash. Escaped occurrences are skipped whole.
pub fn section_until_str<'a>(s: &'a str, start: usize, close: &str) -> Section<'a> {
    let start = start.min(s.len());
    let mut from = start;

    while let Some(rel) = s[from..].find(close) {
        let at = from + rel;
        if at > 0 && s.as_bytes()[at - 1] == ESCAPE {
            from = at + close.len();
            continue;
        }
        return Section {
            text: &s[start..at],
            next: at + close.len(),
        };
    }

    Section {
        text: &s[start..],
        next: s.len(),
    }
}
