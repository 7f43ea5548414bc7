use crate::dates::derived::{abbreviation_offset, expected_text, split_token_text};
use crate::dates::error::DateError;
use crate::dates::format_token::{FormatToken, Segment, compile, native_pattern};
use crate::dates::utils::or_empty;
use chrono::format::{Parsed, StrftimeItems, parse, parse_and_remainder};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use log::debug;
use std::fmt::Write;

/// Formats `value` according to the PHP-style token `format`.
///
/// The value is parsed with the compiled format and rendered again with the
/// same format, so the filter validates and normalises rather than converts.
/// Returns an empty string when the format is empty or the value does not match.
pub fn date(value: &str, format: &str) -> String {
    or_empty("date", value, try_date(value, format))
}

pub fn try_date(value: &str, format: &str) -> Result<String, DateError> {
    let segments = compile(format)?;
    let pattern = native_pattern(&segments);
    let reading = read(value, &segments, &pattern)?;
    reading.check_derived(&segments, value)?;
    reading.render(&segments, &pattern)
}

/// A parsed value together with the raw text of each derived token, in order.
struct Reading<'a> {
    datetime: DateTime<FixedOffset>,
    token_texts: Vec<&'a str>,
}

impl Reading<'_> {
    fn check_derived(&self, segments: &[Segment], value: &str) -> Result<(), DateError> {
        for (token, text) in derived_tokens(segments).zip(&self.token_texts) {
            let Some(expected) = expected_text(token, &self.datetime) else {
                continue;
            };
            if expected != *text {
                return Err(token_mismatch(value, token));
            }
        }
        Ok(())
    }

    fn render(&self, segments: &[Segment], pattern: &str) -> Result<String, DateError> {
        let render_error = || DateError::Render {
            pattern: pattern.to_string(),
        };
        let mut token_texts = self.token_texts.iter();
        let mut rendered = String::new();
        for segment in segments {
            match segment {
                Segment::Native(native) => write!(rendered, "{}", self.datetime.format(native))
                    .map_err(|_| render_error())?,
                Segment::Derived(_) => rendered.push_str(token_texts.next().ok_or_else(render_error)?),
            }
        }
        Ok(rendered)
    }
}

fn derived_tokens(segments: &[Segment]) -> impl Iterator<Item = FormatToken> + '_ {
    segments.iter().filter_map(|segment| match segment {
        Segment::Derived(token) => Some(*token),
        Segment::Native(_) => None,
    })
}

/// Walks the segments over `value`: chrono reads the native runs, derived
/// tokens are split off by hand. A timezone abbreviation sets the offset.
fn read<'a>(value: &'a str, segments: &[Segment], pattern: &str) -> Result<Reading<'a>, DateError> {
    let mut parsed = Parsed::new();
    let mut token_texts = vec![];
    let mut rest = value;

    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Native(native) if index + 1 == segments.len() => {
                parse(&mut parsed, rest, StrftimeItems::new(native))
                    .map_err(|source| parse_error(value, pattern, source))?;
                rest = "";
            }
            Segment::Native(native) => {
                rest = parse_and_remainder(&mut parsed, rest, StrftimeItems::new(native))
                    .map_err(|source| parse_error(value, pattern, source))?;
            }
            Segment::Derived(token) => {
                let (text, remainder) =
                    split_token_text(*token, rest).ok_or_else(|| token_mismatch(value, *token))?;
                if *token == FormatToken::TimezoneAbbreviation {
                    let offset =
                        abbreviation_offset(text).ok_or_else(|| token_mismatch(value, *token))?;
                    parsed
                        .set_offset(i64::from(offset))
                        .map_err(|source| parse_error(value, pattern, source))?;
                }
                token_texts.push(text);
                rest = remainder;
            }
        }
    }

    if !rest.is_empty() {
        return Err(DateError::TrailingInput {
            value: value.to_string(),
            remainder: rest.to_string(),
        });
    }

    Ok(Reading {
        datetime: resolve(parsed, value, pattern)?,
        token_texts,
    })
}

/// Turns the fields chrono picked up into a point in time.
///
/// A pattern may mention only part of a date or time (`Y`, `H:i`, `g a`).
/// Whatever it leaves out is filled in: January 1st, midnight, AM, UTC.
fn resolve(
    mut parsed: Parsed,
    value: &str,
    pattern: &str,
) -> Result<DateTime<FixedOffset>, DateError> {
    let offset = FixedOffset::east_opt(parsed.offset().unwrap_or(0)).ok_or_else(|| {
        DateError::OutOfRange {
            value: value.to_string(),
        }
    })?;

    if let Some(timestamp) = parsed.timestamp() {
        return DateTime::from_timestamp(timestamp, parsed.nanosecond().unwrap_or(0))
            .map(|utc| utc.with_timezone(&offset))
            .ok_or_else(|| DateError::OutOfRange {
                value: value.to_string(),
            });
    }

    let mentions_date = parsed.year().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some()
        || parsed.month().is_some()
        || parsed.day().is_some()
        || parsed.ordinal().is_some()
        || parsed.isoweek().is_some();
    let mentions_time = parsed.hour_div_12().is_some()
        || parsed.hour_mod_12().is_some()
        || parsed.minute().is_some()
        || parsed.second().is_some()
        || parsed.nanosecond().is_some();

    if !mentions_date && !mentions_time {
        return Err(DateError::Incomplete {
            value: value.to_string(),
            pattern: pattern.to_string(),
        });
    }

    let date = if mentions_date {
        fill_date_defaults(&mut parsed).map_err(|source| parse_error(value, pattern, source))?;
        parsed
            .to_naive_date()
            .map_err(|source| parse_error(value, pattern, source))?
    } else {
        debug!("Pattern '{pattern}' carries no date, defaulting to the Unix epoch");
        NaiveDate::from_ymd_opt(1970, 1, 1).ok_or_else(|| DateError::OutOfRange {
            value: value.to_string(),
        })?
    };

    let time = if mentions_time {
        fill_time_defaults(&mut parsed).map_err(|source| parse_error(value, pattern, source))?;
        parsed
            .to_naive_time()
            .map_err(|source| parse_error(value, pattern, source))?
    } else {
        NaiveTime::from_hms_opt(0, 0, 0).ok_or_else(|| DateError::OutOfRange {
            value: value.to_string(),
        })?
    };

    offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
        .ok_or_else(|| DateError::OutOfRange {
            value: value.to_string(),
        })
}

fn fill_date_defaults(parsed: &mut Parsed) -> chrono::ParseResult<()> {
    let names_calendar_day =
        parsed.month().is_some() || parsed.day().is_some() || parsed.ordinal().is_some();
    let names_iso_week = parsed.isoyear().is_some() || parsed.isoweek().is_some();

    if names_iso_week && !names_calendar_day {
        if parsed.isoyear().is_none() {
            parsed.set_isoyear(parsed.year().map_or(1970, i64::from))?;
        }
        if parsed.isoweek().is_none() {
            parsed.set_isoweek(1)?;
        }
        if parsed.weekday().is_none() {
            parsed.set_weekday(Weekday::Mon)?;
        }
        return Ok(());
    }

    if parsed.year().is_none() && parsed.year_mod_100().is_none() {
        parsed.set_year(parsed.isoyear().map_or(1970, i64::from))?;
    }
    if parsed.ordinal().is_some() {
        return Ok(());
    }
    if parsed.month().is_none() {
        parsed.set_month(1)?;
    }
    if parsed.day().is_none() {
        parsed.set_day(1)?;
    }
    Ok(())
}

fn fill_time_defaults(parsed: &mut Parsed) -> chrono::ParseResult<()> {
    if parsed.hour_mod_12().is_none() {
        parsed.set_hour12(12)?;
    }
    if parsed.hour_div_12().is_none() {
        parsed.set_ampm(false)?;
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

fn token_mismatch(value: &str, token: FormatToken) -> DateError {
    DateError::TokenMismatch {
        value: value.to_string(),
        symbol: token.symbol(),
    }
}

fn parse_error(value: &str, pattern: &str, source: chrono::ParseError) -> DateError {
    DateError::Parse {
        value: value.to_string(),
        pattern: pattern.to_string(),
        source,
    }
}
