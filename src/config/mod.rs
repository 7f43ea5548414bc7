mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod filters_config;
pub use self::filters_config::{FiltersConfig, HumanizeConfig};
