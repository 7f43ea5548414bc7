use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("No configuration file found at {0:?}.")]
    NoConfigFileFound(PathBuf),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid filter configuration: {0}")]
    Validation(#[from] ValidationErrors),
}
