//! Data-directory resolution and user display preferences.

use chrono::format::{Item, StrftimeItems};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::storage::write_replacing;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "FINANCE_CORE_HOME";

const DEFAULT_DIR: [&str; 2] = ["perut", "data"];
const ACCOUNTS_FILE: &str = "accounts.json";
const STATE_FILE: &str = "state.bat";
const CONFIG_FILE: &str = "config.json";

/// Returns the data directory: `$FINANCE_CORE_HOME`, else `~/perut/data`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    DEFAULT_DIR
        .iter()
        .fold(home_dir().unwrap_or_else(|| PathBuf::from(".")), |path, part| {
            path.join(part)
        })
}

/// Resolves every backing file from one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    base: PathBuf,
}

impl DataPaths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_env() -> Self {
        Self::new(app_data_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.base.join(ACCOUNTS_FILE)
    }

    pub fn state_file(&self) -> PathBuf {
        self.base.join(STATE_FILE)
    }

    pub fn config_file(&self) -> PathBuf {
        self.base.join(CONFIG_FILE)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Display preferences read by the command-line front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".into(),
            date_format: Self::DEFAULT_DATE_FORMAT.into(),
        }
    }
}

impl Config {
    pub const DEFAULT_DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// The configured date format, or the default when it is not a valid strftime pattern.
    pub fn effective_date_format(&self) -> &str {
        let invalid = StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        if invalid || self.date_format.is_empty() {
            Self::DEFAULT_DATE_FORMAT
        } else {
            &self.date_format
        }
    }
}

/// Loads and saves `config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn for_paths(paths: &DataPaths) -> Self {
        Self::new(paths.config_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_vec_pretty(config)?;
        write_replacing(&self.path, &json)?;
        Ok(())
    }
}
