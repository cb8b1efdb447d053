/// Route path rendering
///
/// Pure fold from tokens to a router pattern fragment.
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::tokenizer::{SegmentToken, TokenKind};

/// Characters `encodeURI` escapes, minus `|`, plus the ones that would be
/// read as URL structure (`#`, `?`, `&`, `+`)
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'#')
    .add(b'?')
    .add(b'&')
    .add(b'+');

/// Percent-encodes literal path text
///
/// An already encoded slash (`%2F`) is kept as is instead of becoming
/// `%252F`.
///
/// # Examples
///
/// ```
/// use domain_router::segment::encode_path;
///
/// assert_eq!(encode_path("hello world"), "hello%20world");
/// assert_eq!(encode_path("a+b&c"), "a%2Bb%26c");
/// assert_eq!(encode_path("a|b"), "a|b");
/// ```
pub fn encode_path(text: &str) -> String {
    let encoded = utf8_percent_encode(text, PATH_SEGMENT).to_string();
    if encoded.contains("%252") {
        encoded.replace("%252F", "%2F").replace("%252f", "%2F")
    } else {
        encoded
    }
}

/// Renders one token as a router pattern piece
fn render_token(token: &SegmentToken) -> String {
    match token.kind {
        TokenKind::Optional => format!(":{}?", token.value),
        TokenKind::Dynamic => format!(":{}()", token.value),
        TokenKind::CatchAll => format!(":{}(.*)*", token.value),
        // `:` would start a parameter in the router syntax
        TokenKind::Static => encode_path(&token.value).replace(':', "\\:"),
    }
}

/// Renders the tokens of one segment into a route path fragment
///
/// The result always starts with `/`. Tokens from the same segment are
/// concatenated without separator.
///
/// # Examples
///
/// ```
/// use domain_router::{render_route_path, tokenize_segment};
///
/// let tokens = tokenize_segment("[id]").unwrap();
/// assert_eq!(render_route_path(&tokens), "/:id()");
///
/// let tokens = tokenize_segment("[[id]]").unwrap();
/// assert_eq!(render_route_path(&tokens), "/:id?");
///
/// let tokens = tokenize_segment("[...slug]").unwrap();
/// assert_eq!(render_route_path(&tokens), "/:slug(.*)*");
/// ```
pub fn render_route_path(tokens: &[SegmentToken]) -> String {
    tokens.iter().fold(String::from("/"), |mut path, token| {
        path.push_str(&render_token(token));
        path
    })
}
