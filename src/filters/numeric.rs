use crate::constants::DEFAULT_PLURAL_SUFFIX;

const MAX_DECIMAL_PLACES: usize = 32;

/// Appends a plural suffix to `word` unless `count` is exactly 1.
///
/// `arg` is either a plural suffix ("es") or a "singular,plural" pair ("y,ies").
/// Without `arg` the suffix is "s".
///
/// ```
/// use template_filters::pluralize;
///
/// assert_eq!(pluralize(2, "vote", None), "votes");
/// assert_eq!(pluralize(1, "cand", Some("y,ies")), "candy");
/// ```
pub fn pluralize(count: i64, word: &str, arg: Option<&str>) -> String {
    let (singular, plural) = suffixes(arg.unwrap_or(DEFAULT_PLURAL_SUFFIX));
    if count == 1 {
        format!("{word}{singular}")
    } else {
        format!("{word}{plural}")
    }
}

fn suffixes(arg: &str) -> (&str, &str) {
    let mut bits = arg.split(',');
    match (bits.next(), bits.next()) {
        (Some(singular), Some(plural)) => (singular, plural),
        _ => ("", arg),
    }
}

/// Renders `value` with `places` decimals.
///
/// A negative `places` drops the decimals of whole numbers and otherwise
/// behaves like its absolute value. At most 32 decimals are rendered.
pub fn floatformat(value: f64, places: i32) -> String {
    if places < 0 && value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let places = (places.unsigned_abs() as usize).min(MAX_DECIMAL_PLACES);
    format!("{value:.places$}")
}
