// Runtime configuration read from the environment.
//
// Responsibilities
// - Map EMPLOYEES_* variables onto a typed AppConfig, with defaults for everything.
// - Reject values that do not parse instead of silently falling back.

use crate::adapters::simulated::simulated_gateway::{
    DEFAULT_CREATE_DELAY, DEFAULT_DELETE_DELAY, DEFAULT_UPDATE_DELAY,
};
use crate::application::persistence::{LANGUAGE_KEY, STORAGE_KEY};
use crate::application::search_debouncer::DEFAULT_SEARCH_DEBOUNCE;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_STORAGE_DIR: &str = ".employee_directory";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number of milliseconds, got {value:?}: {source}")]
    InvalidMillis {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub language_key: String,
    pub create_delay: Duration,
    pub update_delay: Duration,
    pub delete_delay: Duration,
    pub search_debounce: Duration,
    pub locales_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: STORAGE_KEY.to_string(),
            language_key: LANGUAGE_KEY.to_string(),
            create_delay: DEFAULT_CREATE_DELAY,
            update_delay: DEFAULT_UPDATE_DELAY,
            delete_delay: DEFAULT_DELETE_DELAY,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            locales_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let millis = |var: &'static str, default: Duration| -> Result<Duration, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) => value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|source| ConfigError::InvalidMillis { var, value, source }),
            }
        };
        let non_empty = |var: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(var) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { var }),
                other => Ok(other),
            }
        };

        Ok(Self {
            storage_dir: non_empty("EMPLOYEES_STORAGE_DIR")?
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key: non_empty("EMPLOYEES_STORAGE_KEY")?.unwrap_or(defaults.storage_key),
            language_key: non_empty("EMPLOYEES_LANGUAGE_KEY")?.unwrap_or(defaults.language_key),
            create_delay: millis("EMPLOYEES_CREATE_DELAY_MS", defaults.create_delay)?,
            update_delay: millis("EMPLOYEES_UPDATE_DELAY_MS", defaults.update_delay)?,
            delete_delay: millis("EMPLOYEES_DELETE_DELAY_MS", defaults.delete_delay)?,
            search_debounce: millis("EMPLOYEES_SEARCH_DEBOUNCE_MS", defaults.search_debounce)?,
            locales_dir: non_empty("EMPLOYEES_LOCALES_DIR")?.map(PathBuf::from),
        })
    }
}
