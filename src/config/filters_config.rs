use crate::constants::{DEFAULT_PLURAL_SUFFIX, DEFAULT_TRUNCATION_MARKER, DEFAULT_UNIT_SEPARATOR};
use crate::dates::DurationHumanizer;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Defaults applied by a `FilterSet`. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct FiltersConfig {
    #[validate(length(min = 1))]
    pub plural_suffix: String,
    pub truncation_marker: String,
    pub autoescape: bool,
    #[validate(nested)]
    pub humanize: HumanizeConfig,
    pub random_seed: Option<u64>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        FiltersConfig {
            plural_suffix: DEFAULT_PLURAL_SUFFIX.to_string(),
            truncation_marker: DEFAULT_TRUNCATION_MARKER.to_string(),
            autoescape: true,
            humanize: HumanizeConfig::default(),
            random_seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct HumanizeConfig {
    pub separator: String,
    #[validate(range(min = 1))]
    pub max_units: Option<usize>,
}

impl Default for HumanizeConfig {
    fn default() -> Self {
        HumanizeConfig {
            separator: DEFAULT_UNIT_SEPARATOR.to_string(),
            max_units: None,
        }
    }
}

impl From<&HumanizeConfig> for DurationHumanizer {
    fn from(config: &HumanizeConfig) -> Self {
        DurationHumanizer::new(config.separator.clone(), config.max_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_default_config_is_valid() {
        let config = FiltersConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.plural_suffix, "s");
        assert_eq!(config.truncation_marker, " ...");
        assert_eq!(config.humanize.separator, ", ");
    }

    #[rstest]
    fn test_empty_plural_suffix_is_invalid() {
        let config = FiltersConfig {
            plural_suffix: String::new(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("plural_suffix"));
    }

    #[rstest]
    #[case(Some(0), false)]
    #[case(Some(1), true)]
    #[case(Some(3), true)]
    #[case(None, true)]
    fn test_max_units_validation(#[case] max_units: Option<usize>, #[case] valid: bool) {
        let config = FiltersConfig {
            humanize: HumanizeConfig {
                max_units,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate().is_ok(), valid);
    }

    #[rstest]
    fn test_deserialize_empty_object_gives_defaults() {
        let config: FiltersConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FiltersConfig::default());
    }

    #[rstest]
    fn test_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<FiltersConfig>(r#"{"humanize": {"precision": 2}}"#);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_humanizer_from_config() {
        let config = HumanizeConfig {
            separator: " and ".to_string(),
            max_units: Some(2),
        };
        let humanizer = DurationHumanizer::from(&config);
        assert_eq!(
            humanizer.humanize(TimeDelta::seconds(3 * 3600 + 5 * 60 + 7)),
            "3 hours and 5 minutes"
        );
    }
}
