use super::kinds::{BlockQuote, Heading, Rule, Table};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block rendering: each line is classified independently
/// without reference to surrounding context. Borrowed text is already
/// trimmed and has its block marker removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only, or a heading marker with no text.
    Blank,
    Heading { depth: usize, text: &'a str },
    /// A full row including its outer pipes.
    TableRow(&'a str),
    /// Quoted content with the `>` marker stripped.
    BlockQuote(&'a str),
    Rule,
    Paragraph(&'a str),
}

/// Classifies individual lines for the block rendering phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a raw line. Precedence: heading, table row, blockquote,
    /// rule, paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        if let Some((depth, text)) = Heading::parse(trimmed) {
            if text.is_empty() {
                return LineClass::Blank;
            }
            return LineClass::Heading { depth, text };
        }
        if Table::is_row(trimmed) {
            return LineClass::TableRow(trimmed);
        }
        if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            return LineClass::BlockQuote(text);
        }
        if Rule::matches(trimmed) {
            return LineClass::Rule;
        }
        LineClass::Paragraph(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", LineClass::Blank)]
    #[case::whitespace(" \t ", LineClass::Blank)]
    #[case::heading("  ## Sub  ", LineClass::Heading { depth: 2, text: "Sub" })]
    #[case::heading_markers_only("###", LineClass::Blank)]
    #[case::table("| a | b |", LineClass::TableRow("| a | b |"))]
    #[case::separator_is_table_not_rule("|---|---|", LineClass::TableRow("|---|---|"))]
    #[case::open_table_row("| a | b", LineClass::Paragraph("| a | b"))]
    #[case::quote(">  quoted", LineClass::BlockQuote("quoted"))]
    #[case::rule("----", LineClass::Rule)]
    #[case::rule_with_text("--- break", LineClass::Rule)]
    #[case::two_dashes("-- text", LineClass::Paragraph("-- text"))]
    #[case::paragraph("  plain text ", LineClass::Paragraph("plain text"))]
    #[case::hash_inside("C# rocks", LineClass::Paragraph("C# rocks"))]
    fn classifies(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(LineClassifier.classify(line), expected);
    }
}
