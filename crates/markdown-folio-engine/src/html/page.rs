/// A complete HTML page around a rendered fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Page<'a> {
    pub title: &'a str,
    /// Active language code; `lang` falls back to `en`.
    pub language: Option<&'a str>,
    /// Already minified CSS. No `<style>` element when absent.
    pub style: Option<&'a str>,
    pub body: &'a str,
}

impl Page<'_> {
    pub const DEFAULT_LANGUAGE: &'static str = "en";

    pub fn render(&self) -> String {
        let lang = self
            .language
            .map(str::to_lowercase)
            .unwrap_or_else(|| Self::DEFAULT_LANGUAGE.to_string());

        let mut html = String::with_capacity(self.body.len() + 256);
        html.push_str("<!DOCTYPE html>");
        html.push_str(&format!(
            "<html lang=\"{}\">",
            html_escape::encode_double_quoted_attribute(&lang)
        ));
        html.push_str("<head>");
        html.push_str("<meta charset=\"UTF-8\">");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        html.push_str(&format!(
            "<title>{}</title>",
            html_escape::encode_text(self.title)
        ));
        if let Some(style) = self.style {
            html.push_str(&format!("<style>{style}</style>"));
        }
        html.push_str("</head>");
        html.push_str("<body>");
        html.push_str(self.body);
        html.push_str("</body>");
        html.push_str("</html>");
        html
    }
}
