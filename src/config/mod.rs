//! Configuration module for tagsieve
//!
//! Holds the default record file, output preferences and the suggestion
//! limit. The file lives in the user's config directory; environment
//! variables prefixed with `TAGSIEVE_` override its values.

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Output format for command results
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable, colored text
    #[default]
    Plain,
    /// JSON documents
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TagsieveConfig {
    /// Record file used when a command is not given one
    pub records: Option<PathBuf>,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Default output format
    pub format: OutputFormat,

    /// Maximum number of completion candidates
    pub suggestion_limit: usize,
}

impl Default for TagsieveConfig {
    fn default() -> Self {
        Self {
            records: None,
            quiet: false,
            format: OutputFormat::Plain,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl TagsieveConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tagsieve").join("config.toml"))
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("TAGSIEVE").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set a single key from its textual value
    ///
    /// An empty value for `records` clears it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value of the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "records" => {
                self.records = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| invalid_value(key, value, "true or false"))?;
            }
            "format" => {
                self.format = OutputFormat::from_str(value, true)
                    .map_err(|_| invalid_value(key, value, "plain or json"))?;
            }
            "suggestion_limit" => {
                self.suggestion_limit = value
                    .parse()
                    .map_err(|_| invalid_value(key, value, "a non-negative integer"))?;
            }
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}

fn invalid_value(key: &str, value: &str, expected: &str) -> ConfigError {
    ConfigError::Message(format!("Invalid value '{value}' for '{key}': expected {expected}"))
}
