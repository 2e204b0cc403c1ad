/// Heading block type. The number of leading markers is the depth and is
/// not capped.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Splits a trimmed line into `(depth, text)`.
    ///
    /// Returns `None` for lines without a leading marker. The text may be
    /// empty for lines made only of markers.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let depth = line.chars().take_while(|&c| c == Self::MARKER).count();
        if depth == 0 {
            return None;
        }
        Some((depth, line[depth..].trim_start()))
    }

    pub fn render(depth: usize, inner: &str) -> String {
        format!("<h{depth}>{inner}</h{depth}>")
    }
}
