/// Emphasis markers: a single star for italic, a double star for bold.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: char = '*';
    /// Closing delimiter for bold text.
    pub const STRONG: &'static str = "**";

    pub const ITALIC_OPEN: &'static str = "<i>";
    pub const ITALIC_CLOSE: &'static str = "</i>";
    pub const BOLD_OPEN: &'static str = "<b>";
    pub const BOLD_CLOSE: &'static str = "</b>";
}
