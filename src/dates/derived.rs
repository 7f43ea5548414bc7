use crate::dates::format_token::FormatToken;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

/// Splits the text a derived token stands for off the front of `rest`.
///
/// Only the shape is checked here. Whether the text agrees with the date is
/// decided by [`expected_text`] once the date is known.
pub(crate) fn split_token_text(token: FormatToken, rest: &str) -> Option<(&str, &str)> {
    let len = match token {
        FormatToken::OrdinalSuffix => {
            let text = rest.get(..2)?;
            ORDINAL_SUFFIXES
                .iter()
                .any(|suffix| *suffix == text)
                .then_some(2)?
        }
        FormatToken::DaysInMonth => {
            let text = rest.get(..2)?;
            text.bytes().all(|byte| byte.is_ascii_digit()).then_some(2)?
        }
        FormatToken::LeapYear => matches!(rest.as_bytes().first(), Some(b'0' | b'1')).then_some(1)?,
        FormatToken::TimezoneAbbreviation => {
            let len = rest.bytes().take_while(u8::is_ascii_uppercase).count();
            (len > 0).then_some(len)?
        }
        _ => return None,
    };
    Some(rest.split_at(len))
}

/// The text a date-derived token must hold for `datetime`.
///
/// `None` for tokens whose text is not computed from the date.
pub(crate) fn expected_text(token: FormatToken, datetime: &DateTime<FixedOffset>) -> Option<String> {
    let date = datetime.date_naive();
    match token {
        FormatToken::OrdinalSuffix => Some(ordinal_suffix(date.day()).to_string()),
        FormatToken::DaysInMonth => Some(days_in_month(&date).to_string()),
        FormatToken::LeapYear => Some(u8::from(is_leap_year(date.year())).to_string()),
        _ => None,
    }
}

pub(crate) fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

pub(crate) fn days_in_month(date: &NaiveDate) -> u32 {
    match date.month() {
        2 if is_leap_year(date.year()) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// UTC offset in seconds of a timezone abbreviation.
///
/// Ambiguous abbreviations resolve to their most common reading: `CST` is US
/// Central, `IST` is India and `BST` is British Summer Time.
pub(crate) fn abbreviation_offset(abbreviation: &str) -> Option<i32> {
    let minutes = match abbreviation {
        "UTC" | "GMT" | "WET" => 0,
        "BST" | "CET" | "WEST" => 60,
        "CEST" | "EET" => 120,
        "EEST" | "MSK" => 180,
        "IST" => 330,
        "JST" | "KST" => 540,
        "AEST" => 600,
        "AEDT" => 660,
        "NZST" => 720,
        "NZDT" => 780,
        "EDT" => -240,
        "EST" | "CDT" => -300,
        "CST" | "MDT" => -360,
        "MST" | "PDT" => -420,
        "PST" | "AKDT" => -480,
        "AKST" => -540,
        "HST" => -600,
        _ => return None,
    };
    Some(minutes * 60)
}
