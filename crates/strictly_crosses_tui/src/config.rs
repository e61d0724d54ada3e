//! Frontend configuration.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_crosses::DEFAULT_KEY;
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_crosses.toml";

/// Configuration for the terminal frontend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CrossesConfig {
    /// Directory holding the saved game.
    #[serde(default = "default_store_dir")]
    store_dir: PathBuf,

    /// Key the game document is stored under.
    #[serde(default = "default_storage_key")]
    storage_key: String,

    /// Where log output goes (stdout belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".strictly_crosses")
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_crosses.log")
}

impl Default for CrossesConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            storage_key: default_storage_key(),
            log_file: default_log_file(),
        }
    }
}

impl CrossesConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(store_dir = %config.store_dir.display(), key = %config.storage_key, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present,
    /// else the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.store_dir {
            self.store_dir = dir.clone();
        }
        if let Some(key) = &cli.storage_key {
            self.storage_key = key.clone();
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
