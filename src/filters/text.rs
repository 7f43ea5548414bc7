use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("Slug character class should compile."));
static SLUG_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-\s]+").expect("Slug separator pattern should compile."));

pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

pub fn capfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first letter of every word.
///
/// A word starts after any character that is not alphanumeric or `_`;
/// the remaining letters keep their case.
pub fn title(value: &str) -> String {
    let mut at_word_start = true;
    let mut titled = String::with_capacity(value.len());
    for c in value.chars() {
        if at_word_start {
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    titled
}

/// Converts `value` into a URL slug: "Joel is a slug" becomes "joel-is-a-slug".
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = SLUG_SEPARATORS.replace_all(cleaned.trim(), "-");
    hyphenated
        .trim_matches(|c| c == '-' || c == '_')
        .to_string()
}

/// Removes every occurrence of `arg`.
pub fn cut(value: &str, arg: &str) -> String {
    if arg.is_empty() {
        return value.to_string();
    }
    value.replace(arg, "")
}

pub fn wordcount(value: &str) -> usize {
    value.split_whitespace().count()
}
