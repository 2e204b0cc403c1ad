/// Quoted text inline type.
///
/// Unlike code spans the quote marks themselves stay visible inside the span.
pub struct Quote;

impl Quote {
    pub const MARK: char = '"';
    pub const OPEN: &'static str = "<span class=\"quote\">\"";
    pub const CLOSE: &'static str = "\"</span>";
}
