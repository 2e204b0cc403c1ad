/// Horizontal rule, rendered as a page break.
pub struct Rule;

impl Rule {
    pub const MARKER: &'static str = "---";
    pub const HTML: &'static str = "<p style=\"page-break-after: always;\"></p>";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }
}
