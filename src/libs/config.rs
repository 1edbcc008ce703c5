//! Configuration of the Hamster database location and the Redmine connection.
//!
//! The configuration is a small JSON document:
//!
//! ```json
//! {
//!   "db_path": "/home/me/.local/share/hamster-applet/hamster.db",
//!   "redmine_host": "https://redmine.example.com",
//!   "redmine_key": "0123456789abcdef",
//!   "day_start_minutes": 300
//! }
//! ```
//!
//! Unknown keys are rejected. `db_path` defaults to the standard Hamster
//! location and `day_start_minutes` to midnight. The Redmine keys are
//! required, but may also come from `HAMSTER_REDMINE_HOST` and
//! `HAMSTER_REDMINE_KEY` (a `.env` file in the working directory is
//! honoured); `HAMSTER_DB_PATH` overrides the database path.
//!
//! Without `--config`, the file lives in the per-user data directory:
//! - **Windows**: `%LOCALAPPDATA%\hamster-redmine\config.json`
//! - **macOS**: `~/Library/Application Support/hamster-redmine/config.json`
//! - **Linux**: `~/.local/share/hamster-redmine/config.json`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_REDMINE_HOST: &str = "HAMSTER_REDMINE_HOST";
pub const ENV_REDMINE_KEY: &str = "HAMSTER_REDMINE_KEY";
pub const ENV_DB_PATH: &str = "HAMSTER_DB_PATH";

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Missing required configuration value '{0}'")]
    Missing(&'static str),
    #[error("day_start_minutes must be below 1440, got {0}")]
    DayStart(u32),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "DataStorage::hamster_db_path")]
    pub db_path: PathBuf,

    #[serde(default)]
    pub redmine_host: String,

    #[serde(default)]
    pub redmine_key: String,

    /// Minutes after midnight at which a logical day begins.
    #[serde(default)]
    pub day_start_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: DataStorage::hamster_db_path(),
            redmine_host: String::new(),
            redmine_key: String::new(),
            day_start_minutes: 0,
        }
    }
}

impl Config {
    /// Path used when no `--config` is given.
    pub fn default_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Loads, overrides from the environment and validates a configuration.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        let mut config = Self::read_from(&path)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parses the file at `path` without validating it.
    pub fn read_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Replaces values with the matching environment variables, when set and non-empty.
    pub fn apply_env(&mut self) {
        let var = |name: &str| env::var(name).ok().filter(|value| !value.trim().is_empty());

        if let Some(host) = var(ENV_REDMINE_HOST) {
            self.redmine_host = host;
        }
        if let Some(key) = var(ENV_REDMINE_KEY) {
            self.redmine_key = key;
        }
        if let Some(db_path) = var(ENV_DB_PATH) {
            self.db_path = PathBuf::from(db_path);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.redmine_host.trim().is_empty() {
            return Err(ConfigError::Missing("redmine_host"));
        }
        if self.redmine_key.trim().is_empty() {
            return Err(ConfigError::Missing("redmine_key"));
        }
        if self.day_start_minutes >= MINUTES_PER_DAY {
            return Err(ConfigError::DayStart(self.day_start_minutes));
        }
        Ok(())
    }

    pub fn day_start(&self) -> Duration {
        Duration::minutes(self.day_start_minutes as i64)
    }

    /// Interactive setup, pre-filled with the values stored at `path`.
    pub fn init(path: &Path) -> Result<Config> {
        let current = Self::read_from(path).unwrap_or_default();

        msg_print!(Message::ConfigModuleRedmine);
        let redmine_host: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRedmineHost.to_string())
            .with_initial_text(current.redmine_host.clone())
            .interact_text()?;
        let redmine_key = match current.redmine_key.is_empty() {
            true => Password::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRedmineKey.to_string())
                .interact()?,
            false => Password::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRedmineKey.to_string())
                .allow_empty_password(true)
                .interact()
                .map(|key| if key.is_empty() { current.redmine_key.clone() } else { key })?,
        };

        msg_print!(Message::ConfigModuleHamster);
        let db_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHamsterDb.to_string())
            .default(current.db_path.display().to_string())
            .interact_text()?;
        let day_start_minutes: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDayStart.to_string())
            .default(current.day_start_minutes)
            .validate_with(|minutes: &u32| match *minutes < MINUTES_PER_DAY {
                true => Ok(()),
                false => Err(format!("must be below {}", MINUTES_PER_DAY)),
            })
            .interact_text()?;

        let config = Config {
            db_path: PathBuf::from(db_path),
            redmine_host: redmine_host.trim().trim_end_matches('/').to_string(),
            redmine_key,
            day_start_minutes,
        };
        config.validate()?;
        Ok(config)
    }
}
