use log::debug;

use crate::parsing::inline::InlineRenderer;

use super::{
    classify::{LineClass, LineClassifier},
    kinds::{BlockQuote, Heading, Paragraph, Rule, Table},
    sections::SectionStack,
};

/// Multi-line block being accumulated.
#[derive(Debug)]
enum LeafState {
    None,
    /// Raw rows, outer pipes included.
    Table(Vec<String>),
    /// Quoted lines with their markers stripped.
    BlockQuote(Vec<String>),
}

/// Block rendering state machine.
///
/// Lines are fed one at a time with [`BlockRenderer::push`]. Tables and
/// blockquotes accumulate until a line of another class arrives, which is
/// then handled normally. Heading sections stay open across files until
/// [`BlockRenderer::finish`].
pub struct BlockRenderer<'t> {
    classifier: LineClassifier,
    inline: InlineRenderer<'t>,
    sections: SectionStack,
    leaf: LeafState,
    out: String,
}

impl<'t> BlockRenderer<'t> {
    pub fn new(inline: InlineRenderer<'t>) -> Self {
        Self {
            classifier: LineClassifier,
            inline,
            sections: SectionStack::default(),
            leaf: LeafState::None,
            out: String::new(),
        }
    }

    pub fn push(&mut self, line: &str) {
        let class = self.classifier.classify(line);
        if self.extend_leaf(&class) {
            return;
        }
        self.flush_leaf();

        match class {
            LineClass::Blank => {}
            LineClass::Heading { depth, text } => {
                self.sections.open(depth, &mut self.out);
                let inner = self.inline.render(text);
                self.emit(&Heading::render(depth, &inner));
            }
            LineClass::TableRow(row) => self.leaf = LeafState::Table(vec![row.to_string()]),
            LineClass::BlockQuote(text) => {
                self.leaf = LeafState::BlockQuote(vec![text.to_string()]);
            }
            LineClass::Rule => self.emit(Rule::HTML),
            LineClass::Paragraph(text) => {
                if let Some(text) = self.inline.resolver().line_filter(text) {
                    let inner = self.inline.render_resolved(&text);
                    self.emit(&Paragraph::render(&inner));
                }
            }
        }
    }

    /// Flushes any table or blockquote at the end of a source file.
    /// Sections stay open.
    pub fn end_file(&mut self) {
        self.flush_leaf();
    }

    /// Flushes pending blocks, closes every open section and returns the HTML.
    pub fn finish(mut self) -> String {
        self.flush_leaf();
        debug!(
            "closing {} open sections, innermost depth {}",
            self.sections.len(),
            self.sections.depth()
        );
        self.sections.close_all(&mut self.out);
        self.out
    }

    fn extend_leaf(&mut self, class: &LineClass<'_>) -> bool {
        match (&mut self.leaf, class) {
            (LeafState::Table(rows), LineClass::TableRow(row)) => {
                rows.push(row.to_string());
                true
            }
            (LeafState::BlockQuote(lines), LineClass::BlockQuote(text)) => {
                lines.push(text.to_string());
                true
            }
            _ => false,
        }
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Table(rows) => {
                let html = self.render_table(&rows);
                self.emit(&html);
            }
            LeafState::BlockQuote(lines) => {
                let paragraphs: Vec<String> = lines
                    .iter()
                    .filter(|l| !l.is_empty())
                    .map(|l| self.inline.render(l))
                    .collect();
                self.emit(&BlockQuote::render(&paragraphs));
            }
        }
    }

    fn render_table(&self, rows: &[String]) -> String {
        let rows: Vec<Vec<&str>> = rows.iter().map(|r| Table::cells(r)).collect();
        let has_header = rows.get(1).is_some_and(|r| Table::is_separator(r));
        debug!("table with {} rows, header: {has_header}", rows.len());

        let mut html = String::from("<table>");
        let body = if has_header {
            html.push_str(&self.render_row(&rows[0], "th"));
            &rows[2..]
        } else {
            &rows[..]
        };
        for row in body {
            html.push_str(&self.render_row(row, "td"));
        }
        html.push_str("</table>");
        html
    }

    fn render_row(&self, cells: &[&str], tag: &str) -> String {
        let cells: String = cells
            .iter()
            .map(|c| format!("<{tag}>{}</{tag}>", self.inline.render(c)))
            .collect();
        format!("<tr>{cells}</tr>")
    }

    fn emit(&mut self, html: &str) {
        self.out.push_str(html);
        self.out.push('\n');
    }
}
