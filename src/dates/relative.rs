use crate::constants::RFC3339_PATTERN;
use crate::dates::clock::{Clock, SystemClock};
use crate::dates::error::DateError;
use crate::dates::humanize::DurationHumanizer;
use crate::dates::utils::or_empty;
use chrono::{DateTime, Utc};

/// Time elapsed since the RFC3339 timestamp `value`, e.g. "4 days, 6 hours".
pub fn time_since(value: &str) -> String {
    or_empty(
        "timesince",
        value,
        try_time_since(value, &SystemClock, &DurationHumanizer::default()),
    )
}

/// Time left until the RFC3339 timestamp `value`.
pub fn time_until(value: &str) -> String {
    or_empty(
        "timeuntil",
        value,
        try_time_until(value, &SystemClock, &DurationHumanizer::default()),
    )
}

pub fn try_time_since(
    value: &str,
    clock: &(impl Clock + ?Sized),
    humanizer: &DurationHumanizer,
) -> Result<String, DateError> {
    let then = parse_rfc3339(value)?;
    Ok(humanizer.humanize(clock.now() - then))
}

pub fn try_time_until(
    value: &str,
    clock: &(impl Clock + ?Sized),
    humanizer: &DurationHumanizer,
) -> Result<String, DateError> {
    let then = parse_rfc3339(value)?;
    Ok(humanizer.humanize(then - clock.now()))
}

fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>, DateError> {
    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.with_timezone(&Utc))
        .map_err(|source| DateError::Parse {
            value: value.to_string(),
            pattern: RFC3339_PATTERN.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::clock::FixedClock;
    use chrono::{SecondsFormat, TimeDelta, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap())
    }

    fn shifted(clock: &FixedClock, delta: TimeDelta) -> String {
        (clock.now() + delta).to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[rstest]
    #[case(TimeDelta::minutes(-5), "5 minutes")]
    #[case(TimeDelta::hours(-1), "1 hour")]
    #[case(TimeDelta::seconds(-1), "1 second")]
    #[case(TimeDelta::milliseconds(-1_500), "2 seconds")]
    #[case(TimeDelta::days(-4) - TimeDelta::hours(6), "4 days, 6 hours")]
    #[case(TimeDelta::zero(), "0 seconds")]
    fn test_time_since(clock: FixedClock, #[case] delta: TimeDelta, #[case] expected: &str) {
        let value = shifted(&clock, delta);
        let humanizer = DurationHumanizer::default();
        assert_eq!(
            try_time_since(&value, &clock, &humanizer).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case(TimeDelta::minutes(5), "5 minutes")]
    #[case(TimeDelta::hours(1), "1 hour")]
    #[case(TimeDelta::seconds(1), "1 second")]
    fn test_time_until(clock: FixedClock, #[case] delta: TimeDelta, #[case] expected: &str) {
        let value = shifted(&clock, delta);
        let humanizer = DurationHumanizer::default();
        assert_eq!(
            try_time_until(&value, &clock, &humanizer).unwrap(),
            expected
        );
    }

    #[rstest]
    fn test_time_until_past_uses_magnitude(clock: FixedClock) {
        let value = shifted(&clock, TimeDelta::minutes(-3));
        let humanizer = DurationHumanizer::default();
        assert_eq!(
            try_time_until(&value, &clock, &humanizer).unwrap(),
            "3 minutes"
        );
    }

    #[rstest]
    fn test_time_since_respects_offsets(clock: FixedClock) {
        let humanizer = DurationHumanizer::default();
        // 12:00 UTC is 13:00 at +01:00, so 12:30+01:00 lies 30 minutes in the past.
        assert_eq!(
            try_time_since("2024-03-10T12:30:00+01:00", &clock, &humanizer).unwrap(),
            "30 minutes"
        );
    }

    #[rstest]
    #[case("invalid date")]
    #[case("2024-03-10")]
    #[case("")]
    fn test_invalid_timestamp(clock: FixedClock, #[case] value: &str) {
        let humanizer = DurationHumanizer::default();
        assert!(matches!(
            try_time_since(value, &clock, &humanizer),
            Err(DateError::Parse { .. })
        ));
        assert_eq!(time_since(value), "");
        assert_eq!(time_until(value), "");
    }

    #[rstest]
    fn test_time_since_system_clock() {
        let value = (Utc::now() - TimeDelta::minutes(5)).to_rfc3339_opts(SecondsFormat::Nanos, true);
        assert!(time_since(&value).starts_with("5 minutes"));
    }

    #[rstest]
    fn test_time_until_system_clock() {
        let value = (Utc::now() + TimeDelta::hours(1)).to_rfc3339_opts(SecondsFormat::Nanos, true);
        assert!(time_until(&value).starts_with("1 hour"));
    }
}
