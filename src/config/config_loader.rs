use config::{Config, ConfigError, File, FileFormat};
use serde::de::DeserializeOwned;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load<T: DeserializeOwned>(file_path: &Path) -> Result<T, ConfigError> {
        let Some(ext) = file_path.extension() else {
            return Err(ConfigError::NotFound(format!(
                "Could not find file extension on path {file_path:?}"
            )));
        };
        let file_format = match ext.to_str() {
            Some("yaml") => Ok(FileFormat::Yaml),
            Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            Some("ron") => Ok(FileFormat::Ron),
            _ => Err(ConfigError::NotFound(format!(
                "File format not supported. File needs to end with .yaml, .json, .toml or .ron. {file_path:?}"
            ))),
        }?;

        let config = Config::builder()
            .add_source(File::from(file_path).format(file_format))
            .build()?;
        config.try_deserialize()
    }
}
