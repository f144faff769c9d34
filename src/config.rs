//! Functionality related to user configuration.
use std::{fs, io::ErrorKind};

use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::eyre::{self, eyre};
use serde::Deserialize;

use crate::utils;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the scheduler keeps its state.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database. Defaults to a file in the data directory.
    pub path: Option<Utf8PathBuf>,
}

/// How much the scheduler logs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter, e.g. `info` or `vaxsched=debug`.
    pub level: String,
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}

/// [Config] represents the values configurable by the user.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}
impl Config {
    /// Load the [Config] from `config.toml` in the config directory. A missing file means every
    /// setting keeps its default.
    pub fn load() -> eyre::Result<Self> {
        Self::load_from(&utils::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load the [Config] from a specific file.
    pub fn load_from(config_file_path: &Utf8Path) -> eyre::Result<Self> {
        let config_file_content = match fs::read_to_string(config_file_path) {
            Ok(file_content) => file_content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                return Err(eyre!(
                    "Permission denied for config file at path \"{config_file_path}\"."
                ))
            }
            Err(err) => return Err(eyre!(err)),
        };

        toml::from_str(&config_file_content).map_err(|err| eyre!(err))
    }
}
