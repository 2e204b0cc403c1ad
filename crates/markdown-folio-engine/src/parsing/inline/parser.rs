use crate::translation::Resolver;

use super::{
    cursor::{Cursor, section_until_char, section_until_str},
    kinds::{CodeSpan, Emphasis, ErrorMark, Escape, Quote},
};

/// Renders the inline content of a single line to HTML.
///
/// Holds the active [`Resolver`] so translation keys are substituted before
/// any markup is interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineRenderer<'t> {
    resolver: Resolver<'t>,
}

impl<'t> InlineRenderer<'t> {
    pub fn new(resolver: Resolver<'t>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> Resolver<'t> {
        self.resolver
    }

    /// Translates `text`, then renders its inline markup.
    pub fn render(&self, text: &str) -> String {
        render_markup(&self.resolver.apply(text))
    }

    /// Renders inline markup of text that has already been translated.
    pub fn render_resolved(&self, text: &str) -> String {
        render_markup(text)
    }
}

/// Renders escapes, quotes, code spans and emphasis in `s`.
///
/// Ambient text is copied through unescaped. Unterminated constructs run to
/// the end of the string and are still closed in the output.
pub fn render_markup(s: &str) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len() + s.len() / 4);

    while let Some(c) = cur.bump() {
        match c {
            Escape::MARK => render_escape(&mut cur, &mut out),
            Quote::MARK => {
                let section = section_until_char(s, cur.i, Quote::MARK);
                out.push_str(Quote::OPEN);
                out.push_str(section.text);
                out.push_str(Quote::CLOSE);
                cur.jump_to(section.next);
            }
            CodeSpan::TICK => {
                let section = section_until_char(s, cur.i, CodeSpan::TICK);
                out.push_str(CodeSpan::OPEN);
                out.push_str(section.text);
                out.push_str(CodeSpan::CLOSE);
                cur.jump_to(section.next);
            }
            Emphasis::STAR => render_emphasis(&mut cur, &mut out),
            other => out.push(other),
        }
    }

    out
}

/// Handles the character after a backslash. A trailing backslash emits nothing.
fn render_escape(cur: &mut Cursor<'_>, out: &mut String) {
    let Some(next) = cur.bump() else {
        return;
    };
    if Escape::is_literal(next) {
        out.push(next);
    } else {
        out.push_str(&ErrorMark::render(&format!("{}{next}", Escape::MARK)));
    }
}

/// Handles a star: `**` opens bold, a single star opens italic, a star at
/// the very end is literal.
fn render_emphasis(cur: &mut Cursor<'_>, out: &mut String) {
    let (open, close, section) = match cur.peek() {
        None => {
            out.push(Emphasis::STAR);
            return;
        }
        Some(Emphasis::STAR) => {
            cur.bump();
            (
                Emphasis::BOLD_OPEN,
                Emphasis::BOLD_CLOSE,
                section_until_str(cur.s, cur.i, Emphasis::STRONG),
            )
        }
        Some(_) => (
            Emphasis::ITALIC_OPEN,
            Emphasis::ITALIC_CLOSE,
            section_until_char(cur.s, cur.i, Emphasis::STAR),
        ),
    };

    out.push_str(open);
    out.push_str(section.text);
    out.push_str(close);
    cur.jump_to(section.next);
}
