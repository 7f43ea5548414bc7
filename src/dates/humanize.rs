use crate::constants::DEFAULT_UNIT_SEPARATOR;
use chrono::TimeDelta;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    pub fn seconds(&self) -> u64 {
        match self {
            TimeUnit::Year => 365 * 24 * 3600,
            TimeUnit::Week => 7 * 24 * 3600,
            TimeUnit::Day => 24 * 3600,
            TimeUnit::Hour => 3600,
            TimeUnit::Minute => 60,
            TimeUnit::Second => 1,
        }
    }

    /// "1 hour", "0 hours", "5 hours".
    pub fn describe(&self, count: u64) -> String {
        let name: &'static str = self.into();
        if count == 1 {
            format!("{count} {name}")
        } else {
            format!("{count} {name}s")
        }
    }
}

/// Rounds the magnitude of `delta` half up to whole seconds.
pub fn round_to_seconds(delta: TimeDelta) -> u64 {
    let millis = delta.abs().num_milliseconds();
    (millis.saturating_add(500) / 1000) as u64
}

/// Renders durations as phrases like "2 days, 3 hours, 1 second".
#[derive(Debug, Clone, PartialEq)]
pub struct DurationHumanizer {
    separator: String,
    max_units: Option<usize>,
}

impl DurationHumanizer {
    pub fn new(separator: impl Into<String>, max_units: Option<usize>) -> Self {
        Self {
            separator: separator.into(),
            max_units,
        }
    }

    pub fn humanize(&self, delta: TimeDelta) -> String {
        self.humanize_seconds(round_to_seconds(delta))
    }

    pub fn humanize_seconds(&self, total_seconds: u64) -> String {
        let components = Self::components(total_seconds);
        if components.is_empty() {
            return TimeUnit::Second.describe(0);
        }

        let shown = self.max_units.unwrap_or(components.len());
        components
            .iter()
            .take(shown.max(1))
            .map(|(count, unit)| unit.describe(*count))
            .collect::<Vec<String>>()
            .join(&self.separator)
    }

    /// Splits a duration into its non-zero units, largest first.
    pub fn components(total_seconds: u64) -> Vec<(u64, TimeUnit)> {
        let mut remainder = total_seconds;
        TimeUnit::iter()
            .filter_map(|unit| {
                let count = remainder / unit.seconds();
                remainder %= unit.seconds();
                (count > 0).then_some((count, unit))
            })
            .collect()
    }
}

impl Default for DurationHumanizer {
    fn default() -> Self {
        DurationHumanizer::new(DEFAULT_UNIT_SEPARATOR, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn humanizer() -> DurationHumanizer {
        DurationHumanizer::default()
    }

    #[rstest]
    #[case(0, "0 seconds")]
    #[case(1, "1 second")]
    #[case(2, "2 seconds")]
    #[case(60, "1 minute")]
    #[case(300, "5 minutes")]
    #[case(3600, "1 hour")]
    #[case(3661, "1 hour, 1 minute, 1 second")]
    #[case(90_000, "1 day, 1 hour")]
    #[case(8 * 24 * 3600, "1 week, 1 day")]
    #[case(366 * 24 * 3600, "1 year, 1 day")]
    fn test_humanize_seconds(
        humanizer: DurationHumanizer,
        #[case] seconds: u64,
        #[case] expected: &str,
    ) {
        assert_eq!(humanizer.humanize_seconds(seconds), expected);
    }

    #[rstest]
    #[case(TimeDelta::milliseconds(400), "0 seconds")]
    #[case(TimeDelta::milliseconds(1_400), "1 second")]
    #[case(TimeDelta::milliseconds(1_500), "2 seconds")]
    #[case(TimeDelta::milliseconds(-1_500), "2 seconds")]
    #[case(TimeDelta::minutes(-5), "5 minutes")]
    fn test_humanize_rounds_half_up(
        humanizer: DurationHumanizer,
        #[case] delta: TimeDelta,
        #[case] expected: &str,
    ) {
        assert_eq!(humanizer.humanize(delta), expected);
    }

    #[rstest]
    fn test_max_units() {
        let humanizer = DurationHumanizer::new(" ", Some(2));
        assert_eq!(humanizer.humanize_seconds(3661), "1 hour 1 minute");
        assert_eq!(humanizer.humanize_seconds(59), "59 seconds");
    }

    #[rstest]
    fn test_components_skip_zero_units() {
        assert_eq!(
            DurationHumanizer::components(3600 + 5),
            vec![(1, TimeUnit::Hour), (5, TimeUnit::Second)]
        );
    }

    #[rstest]
    fn test_describe_is_singular_only_for_one() {
        for unit in TimeUnit::iter() {
            let name: &'static str = unit.into();
            assert_eq!(unit.describe(1), format!("1 {name}"));
            assert_eq!(unit.describe(0), format!("0 {name}s"));
            assert_eq!(unit.describe(7), format!("7 {name}s"));
        }
    }
}
