use cssparser::{ParseError, Parser, ParserInput, Token};

type CssParseError<'i> = ParseError<'i, ()>;

/// Strips comments and redundant whitespace from a stylesheet.
///
/// A whitespace run is kept as one space only when it follows an identifier
/// character, so `a b` stays a descendant selector while `a { b: c; }`
/// shrinks to `a {b:c;}`. Every other token, quoted strings included, is
/// copied exactly as written.
pub fn minify_css(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    let mut keep_space = false;

    minify_tokens(&mut parser, &mut out, &mut keep_space);
    out
}

fn minify_tokens(parser: &mut Parser<'_, '_>, out: &mut String, keep_space: &mut bool) {
    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Comment(_) => {}
            Token::WhiteSpace(_) => {
                if *keep_space {
                    out.push(' ');
                }
                *keep_space = false;
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                out.push_str(parser.slice_from(start));
                *keep_space = false;
                let _ = parser.parse_nested_block(|p| {
                    minify_tokens(p, out, keep_space);
                    Ok::<_, CssParseError>(())
                });
                out.push(closing(&token));
                *keep_space = false;
            }
            _ => {
                let text = parser.slice_from(start);
                out.push_str(text);
                *keep_space = text.chars().next_back().is_some_and(is_ident_char);
            }
        }
    }
}

fn closing(block: &Token<'_>) -> char {
    match block {
        Token::SquareBracketBlock => ']',
        Token::CurlyBracketBlock => '}',
        _ => ')',
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
