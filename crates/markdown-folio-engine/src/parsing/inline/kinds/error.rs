/// The inline marker emitted for soft failures: unknown escapes and
/// untranslatable keys. Rendering continues after it.
pub struct ErrorMark;

impl ErrorMark {
    pub const OPEN: &'static str = "<span class=\"error\">Unexpected character: ";
    pub const CLOSE: &'static str = "</span>";

    pub fn render(token: &str) -> String {
        format!("{}{token}{}", Self::OPEN, Self::CLOSE)
    }
}
