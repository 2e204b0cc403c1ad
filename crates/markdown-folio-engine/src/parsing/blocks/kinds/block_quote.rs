/// Blockquote block type with owned delimiter constant.
///
/// Consecutive quoted lines share one `<blockquote>`; each non-empty line
/// becomes its own paragraph.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote marker and the whitespace after it.
    ///
    /// Returns `None` if the line is not quoted.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim_start)
    }

    /// Wraps already rendered paragraphs.
    pub fn render(paragraphs: &[String]) -> String {
        format!("<blockquote><p>{}</p></blockquote>", paragraphs.join("</p><p>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix(">   hello"), Some("hello"));
    }

    #[test]
    fn strip_marker_only() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }

    #[test]
    fn nested_marker_is_content() {
        assert_eq!(BlockQuote::strip_prefix("> > inner"), Some("> inner"));
    }

    #[test]
    fn render_joins_paragraphs() {
        let html = BlockQuote::render(&["a".to_string(), "b".to_string()]);
        assert_eq!(html, "<blockquote><p>a</p><p>b</p></blockquote>");
    }
}
