use crate::dates::error::DateError;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// A single-letter date/time symbol of the PHP `date()` mini-language
/// together with the chrono `strftime` fragment it stands for.
///
/// Most tokens map onto a chrono fragment. The ordinal suffix (`S`), days in
/// month (`t`), leap-year flag (`L`) and timezone abbreviation (`T`) have no
/// chrono counterpart that survives parsing; they are derived tokens, read and
/// written by the date filter itself. The Swatch beat (`B`) and the DST flag
/// (`I`) are not supported and pass through as literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum FormatToken {
    DayOfMonth,
    DayOfMonthUnpadded,
    OrdinalSuffix,
    WeekdayShort,
    WeekdayLong,
    IsoWeekday,
    Weekday,
    /// Day of the year counted from 1 (`001` to `366`). PHP's `z` counts from 0;
    /// this one follows chrono's `%j` so that parsing and rendering agree.
    DayOfYear,
    IsoWeek,
    MonthLong,
    MonthShort,
    Month,
    MonthUnpadded,
    DaysInMonth,
    LeapYear,
    IsoYear,
    Year,
    YearShort,
    AmPmLower,
    AmPmUpper,
    Hour12Unpadded,
    Hour24Unpadded,
    Hour12,
    Hour24,
    Minute,
    Second,
    Microsecond,
    Millisecond,
    TimezoneAbbreviation,
    Offset,
    OffsetWithColon,
    Iso8601,
    Rfc2822,
    UnixTimestamp,
}

static TOKENS_BY_SYMBOL: Lazy<HashMap<char, FormatToken>> = Lazy::new(|| {
    FormatToken::iter()
        .map(|token| (token.symbol(), token))
        .collect()
});

impl FormatToken {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        TOKENS_BY_SYMBOL.get(&symbol).copied()
    }

    pub fn symbol(&self) -> char {
        match self {
            FormatToken::DayOfMonth => 'd',
            FormatToken::DayOfMonthUnpadded => 'j',
            FormatToken::OrdinalSuffix => 'S',
            FormatToken::WeekdayShort => 'D',
            FormatToken::WeekdayLong => 'l',
            FormatToken::IsoWeekday => 'N',
            FormatToken::Weekday => 'w',
            FormatToken::DayOfYear => 'z',
            FormatToken::IsoWeek => 'W',
            FormatToken::MonthLong => 'F',
            FormatToken::MonthShort => 'M',
            FormatToken::Month => 'm',
            FormatToken::MonthUnpadded => 'n',
            FormatToken::DaysInMonth => 't',
            FormatToken::LeapYear => 'L',
            FormatToken::IsoYear => 'o',
            FormatToken::Year => 'Y',
            FormatToken::YearShort => 'y',
            FormatToken::AmPmLower => 'a',
            FormatToken::AmPmUpper => 'A',
            FormatToken::Hour12Unpadded => 'g',
            FormatToken::Hour24Unpadded => 'G',
            FormatToken::Hour12 => 'h',
            FormatToken::Hour24 => 'H',
            FormatToken::Minute => 'i',
            FormatToken::Second => 's',
            FormatToken::Microsecond => 'u',
            FormatToken::Millisecond => 'v',
            FormatToken::TimezoneAbbreviation => 'T',
            FormatToken::Offset => 'O',
            FormatToken::OffsetWithColon => 'P',
            FormatToken::Iso8601 => 'c',
            FormatToken::Rfc2822 => 'r',
            FormatToken::UnixTimestamp => 'U',
        }
    }

    /// The chrono `strftime` fragment used for parsing and rendering, or
    /// `None` for derived tokens.
    pub fn fragment(&self) -> Option<&'static str> {
        let fragment = match self {
            FormatToken::DayOfMonth => "%d",
            FormatToken::DayOfMonthUnpadded => "%-d",
            FormatToken::WeekdayShort => "%a",
            FormatToken::WeekdayLong => "%A",
            FormatToken::IsoWeekday => "%u",
            FormatToken::Weekday => "%w",
            FormatToken::DayOfYear => "%j",
            FormatToken::IsoWeek => "%V",
            FormatToken::MonthLong => "%B",
            FormatToken::MonthShort => "%b",
            FormatToken::Month => "%m",
            FormatToken::MonthUnpadded => "%-m",
            FormatToken::IsoYear => "%G",
            FormatToken::Year => "%Y",
            FormatToken::YearShort => "%y",
            FormatToken::AmPmLower => "%P",
            FormatToken::AmPmUpper => "%p",
            FormatToken::Hour12Unpadded => "%-I",
            FormatToken::Hour24Unpadded => "%-H",
            FormatToken::Hour12 => "%I",
            FormatToken::Hour24 => "%H",
            FormatToken::Minute => "%M",
            FormatToken::Second => "%S",
            FormatToken::Microsecond => "%6f",
            FormatToken::Millisecond => "%3f",
            FormatToken::Offset => "%z",
            FormatToken::OffsetWithColon => "%:z",
            FormatToken::Iso8601 => "%+",
            FormatToken::Rfc2822 => "%a, %d %b %Y %H:%M:%S %z",
            FormatToken::UnixTimestamp => "%s",
            FormatToken::OrdinalSuffix
            | FormatToken::DaysInMonth
            | FormatToken::LeapYear
            | FormatToken::TimezoneAbbreviation => return None,
        };
        Some(fragment)
    }

    pub fn is_derived(&self) -> bool {
        self.fragment().is_none()
    }
}

/// A run of a compiled format: chrono pattern text or a single derived token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Native(String),
    Derived(FormatToken),
}

/// Compiles a token format into segments in one pass over its characters.
///
/// Tokens with a chrono fragment and literal characters accumulate into
/// `Native` runs; every derived token becomes a segment of its own.
pub fn compile(format: &str) -> Result<Vec<Segment>, DateError> {
    if format.is_empty() {
        return Err(DateError::EmptyFormat);
    }

    let mut segments = vec![];
    let mut native = String::with_capacity(format.len() * 2);
    for symbol in format.chars() {
        match FormatToken::from_symbol(symbol) {
            Some(token) => match token.fragment() {
                Some(fragment) => native.push_str(fragment),
                None => {
                    if !native.is_empty() {
                        segments.push(Segment::Native(std::mem::take(&mut native)));
                    }
                    segments.push(Segment::Derived(token));
                }
            },
            None if symbol == '%' => native.push_str("%%"),
            None => native.push(symbol),
        }
    }
    if !native.is_empty() {
        segments.push(Segment::Native(native));
    }
    Ok(segments)
}

/// The chrono pattern of compiled segments; derived tokens keep their symbol.
pub(crate) fn native_pattern(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Native(native) => native.clone(),
            Segment::Derived(token) => token.symbol().to_string(),
        })
        .collect()
}

/// Translates a token format such as `Y-m-d H:i:s` into the chrono pattern
/// `%Y-%m-%d %H:%M:%S`.
///
/// The scan runs once over the characters of `format`, so the text of a fragment
/// is never looked up again. Characters outside the token table are copied
/// verbatim, except `%`, which is escaped for chrono. Derived tokens have no
/// chrono fragment and appear as their own symbol; use [`compile`] to keep them
/// apart.
pub fn translate(format: &str) -> Result<String, DateError> {
    let pattern = native_pattern(&compile(format)?);
    debug!("Translated date format '{format}' to pattern '{pattern}'");
    Ok(pattern)
}
