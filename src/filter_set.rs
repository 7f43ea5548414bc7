use crate::config::{ConfigLoader, FiltersConfig};
use crate::dates::utils::or_empty;
use crate::dates::{Clock, DurationHumanizer, SystemClock, try_time_since, try_time_until};
use crate::error::ConstructionError;
use crate::filters::{linenumbers, pluralize, random_item, truncatewords_with_marker};
use crate::value::{Item, Sequence};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use validator::Validate;

/// Filters bound to a configuration, a clock and a random generator.
///
/// Filters that need no configured default are exposed as free functions in
/// [`crate::filters`] and [`crate::dates`] and have no method here.
pub struct FilterSet {
    config: FiltersConfig,
    humanizer: DurationHumanizer,
    clock: Box<dyn Clock>,
    rng: Mutex<StdRng>,
}

impl FilterSet {
    pub fn from_config_file(path: &Path) -> Result<Self, ConstructionError> {
        if !path.exists() {
            return Err(ConstructionError::NoConfigFileFound(path.to_path_buf()));
        }
        let config: FiltersConfig = ConfigLoader::load(path)?;
        info!("Loaded filter configuration from {path:?}");
        FilterSet::try_from(config)
    }

    /// Replaces the system clock used by `time_since` and `time_until`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &FiltersConfig {
        &self.config
    }

    pub fn date(&self, value: &str, format: &str) -> String {
        crate::dates::date(value, format)
    }

    pub fn time_since(&self, value: &str) -> String {
        or_empty(
            "timesince",
            value,
            try_time_since(value, self.clock.as_ref(), &self.humanizer),
        )
    }

    pub fn time_until(&self, value: &str) -> String {
        or_empty(
            "timeuntil",
            value,
            try_time_until(value, self.clock.as_ref(), &self.humanizer),
        )
    }

    /// Pluralizes with the configured suffix.
    pub fn pluralize(&self, count: i64, word: &str) -> String {
        pluralize(count, word, Some(&self.config.plural_suffix))
    }

    pub fn truncatewords(&self, value: &str, limit: usize) -> String {
        truncatewords_with_marker(value, limit, &self.config.truncation_marker)
    }

    pub fn linenumbers(&self, value: &str) -> String {
        linenumbers(value, self.config.autoescape)
    }

    pub fn random_item(&self, value: &Sequence) -> Option<Item> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        random_item(value, &mut *rng)
    }

    fn assemble(config: FiltersConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => {
                debug!("Seeding random_item with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        FilterSet {
            humanizer: DurationHumanizer::from(&config.humanize),
            clock: Box::new(SystemClock),
            rng: Mutex::new(rng),
            config,
        }
    }
}

impl TryFrom<FiltersConfig> for FilterSet {
    type Error = ConstructionError;

    fn try_from(config: FiltersConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(FilterSet::assemble(config))
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        FilterSet::assemble(FiltersConfig::default())
    }
}
