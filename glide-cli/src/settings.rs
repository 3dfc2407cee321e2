use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            output_dir: PathBuf::from("."),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// `glide.toml` from the working directory, overridden by `GLIDE_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources("glide", "GLIDE")
    }

    fn from_sources(file_name: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(file_name).required(false))
            .add_source(Environment::with_prefix(env_prefix))
            .build()?
            .try_deserialize()
    }
}
