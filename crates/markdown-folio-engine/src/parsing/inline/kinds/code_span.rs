/// Code span inline type with owned delimiter and markup.
///
/// Content between the ticks is emitted as-is: no emphasis or escape
/// handling happens inside a code span.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
    pub const OPEN: &'static str = "<span class=\"code\">";
    pub const CLOSE: &'static str = "</span>";
}
