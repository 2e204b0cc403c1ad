/// Paragraph block type.
///
/// Paragraphs have no delimiters - any non-blank line that no other block
/// claims is a paragraph of its own.
pub struct Paragraph;

impl Paragraph {
    pub fn render(inner: &str) -> String {
        format!("<p>{inner}</p>")
    }
}
