use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::borrow::Cow;

// Unreserved characters of RFC 3986 plus `/`.
const URL_SAFE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

// Everything an IRI may carry unescaped, reserved URI characters and `%` included.
const IRI_SAFE_SET: &AsciiSet = &URL_SAFE_SET
    .remove(b'#')
    .remove(b'%')
    .remove(b'[')
    .remove(b']')
    .remove(b'=')
    .remove(b':')
    .remove(b';')
    .remove(b'$')
    .remove(b'&')
    .remove(b'(')
    .remove(b')')
    .remove(b'+')
    .remove(b',')
    .remove(b'!')
    .remove(b'?')
    .remove(b'*')
    .remove(b'@')
    .remove(b'\'');

/// Escapes backslashes and quotes, e.g. for embedding in CSV.
pub fn addslashes(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\'', "\\'")
}

pub(crate) fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Percent-encodes `value` for use in a URL, leaving `/` intact.
pub fn urlencode(value: &str) -> String {
    utf8_percent_encode(value, URL_SAFE_SET).to_string()
}

/// Percent-encodes the characters an IRI may hold but a URI may not,
/// keeping reserved URI characters such as `?`, `&` and `#`.
pub fn iriencode(value: &str) -> String {
    utf8_percent_encode(value, IRI_SAFE_SET).to_string()
}
