//! Config command - show and change settings

use crate::cli::ConfigCommands;
use crate::commands::OutputOptions;
use crate::completions;
use crate::config::TagsieveConfig;
use crate::{TagsieveError, output};
use ::config::ConfigError;
use std::path::Path;

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
/// Returns an error if the configuration cannot be read, changed or saved.
pub fn execute(
    command: &ConfigCommands,
    config: TagsieveConfig,
    path: &Path,
    options: OutputOptions,
) -> Result<()> {
    match command {
        ConfigCommands::Show => println!("{}", render(&config, options)?),
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Set { key, value } => {
            set_value(config, path, key, value)?;
            if !options.quiet {
                println!("Set {key} = {value}");
            }
        }
    }
    Ok(())
}

fn set_value(mut config: TagsieveConfig, path: &Path, key: &str, value: &str) -> Result<TagsieveConfig> {
    config.set(key, value).map_err(|e| match e {
        ConfigError::NotFound(key) => {
            let known: Vec<String> = completions::config_keys().into_iter().map(|c| c.value).collect();
            TagsieveError::InvalidInput(format!("Unknown config key '{key}' (expected one of: {})", known.join(", ")))
        }
        other => other.into(),
    })?;
    config.save_to(path)?;
    Ok(config)
}

fn render(config: &TagsieveConfig, options: OutputOptions) -> Result<String> {
    if options.is_json() {
        return Ok(output::json(config)?);
    }
    toml::to_string_pretty(config)
        .map(|text| text.trim_end().to_string())
        .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")).into())
}
