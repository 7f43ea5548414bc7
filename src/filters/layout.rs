use crate::constants::DEFAULT_TRUNCATION_MARKER;
use crate::filters::encoding::escape_html;
use std::borrow::Cow;

/// Keeps the first `limit` characters of `value`.
pub fn truncatechars(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((cut_at, _)) => value[..cut_at].to_string(),
        None => value.to_string(),
    }
}

/// Keeps the first `limit` words of `value` and marks the cut with " ...".
pub fn truncatewords(value: &str, limit: usize) -> String {
    truncatewords_with_marker(value, limit, DEFAULT_TRUNCATION_MARKER)
}

pub fn truncatewords_with_marker(value: &str, limit: usize, marker: &str) -> String {
    let words: Vec<&str> = value.split_whitespace().collect();
    if words.len() <= limit {
        return value.to_string();
    }
    let kept = words[..limit].join(" ");
    format!("{kept}{marker}").trim_start().to_string()
}

/// Greedily packs words into lines of at most `width` characters.
///
/// A word longer than `width` ends up alone on its own line.
pub fn wordwrap(value: &str, width: usize) -> String {
    let mut lines: Vec<String> = vec![];
    let mut line = String::new();
    let mut line_len = 0;

    for word in value.split_whitespace() {
        let word_len = word.chars().count();
        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

/// Prefixes every line with its 1-based number, zero padded to the width of
/// the line count ("01. first" when there are ten or more lines).
pub fn linenumbers(value: &str, autoescape: bool) -> String {
    let lines: Vec<&str> = value.split('\n').collect();
    let width = lines.len().to_string().len();
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let line = if autoescape {
                escape_html(line)
            } else {
                Cow::Borrowed(*line)
            };
            format!("{:0width$}. {line}", index + 1)
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Joel is a slug", 4, "Joel")]
    #[case("Joel", 10, "Joel")]
    #[case("Joel", 4, "Joel")]
    #[case("crème brûlée", 5, "crème")]
    #[case("", 3, "")]
    #[case("abc", 0, "")]
    fn test_truncatechars(#[case] value: &str, #[case] limit: usize, #[case] expected: &str) {
        assert_eq!(truncatechars(value, limit), expected);
    }

    #[rstest]
    #[case("Joel is a slug", 2, "Joel is ...")]
    #[case("Joel is a slug", 4, "Joel is a slug")]
    #[case("Joel   is a slug", 10, "Joel   is a slug")]
    #[case("Joel is a slug", 0, "...")]
    fn test_truncatewords(#[case] value: &str, #[case] limit: usize, #[case] expected: &str) {
        assert_eq!(truncatewords(value, limit), expected);
    }

    #[rstest]
    fn test_truncatewords_with_marker() {
        assert_eq!(
            truncatewords_with_marker("one two three", 1, "…"),
            "one…"
        );
    }

    #[rstest]
    #[case("Joel is a slug", 5, "Joel\nis a\nslug")]
    #[case("Joel is a slug", 100, "Joel is a slug")]
    #[case("supercalifragilistic is long", 5, "supercalifragilistic\nis\nlong")]
    #[case("a b c d", 3, "a b\nc d")]
    #[case("", 10, "")]
    fn test_wordwrap(#[case] value: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(wordwrap(value, width), expected);
    }

    #[rstest]
    #[case("Hello\nWorld", false, "1. Hello\n2. World")]
    #[case("<Hello>\n<World>", true, "1. &lt;Hello&gt;\n2. &lt;World&gt;")]
    #[case("<Hello>", false, "1. <Hello>")]
    #[case("Hello", false, "1. Hello")]
    fn test_linenumbers(#[case] value: &str, #[case] autoescape: bool, #[case] expected: &str) {
        assert_eq!(linenumbers(value, autoescape), expected);
    }

    #[rstest]
    fn test_linenumbers_pads_to_line_count() {
        let text = (1..=10)
            .map(|n| format!("line {n}"))
            .collect::<Vec<String>>()
            .join("\n");
        let numbered = linenumbers(&text, false);
        let lines: Vec<&str> = numbered.lines().collect();
        assert_eq!(lines[0], "01. line 1");
        assert_eq!(lines[9], "10. line 10");
    }
}
