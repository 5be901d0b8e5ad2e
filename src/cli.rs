//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tagsieve using the `clap` crate.
//! Every command takes query text as a single argument, quoted as typed into
//! a search box.
//!
//! # Commands
//!
//! - **parse**: Show the structured filter for a query
//! - **search**: List records in a JSON file that match a query
//! - **remove-tag** / **add-tag**: Rewrite query text
//! - **tag-count**: Parse a `tagcount:` value on its own
//! - **tags**: List tag frequencies in a record file
//! - **suggest**: Complete the last token of a query
//! - **config**: Show or change settings
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use tagsieve::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["tagsieve", "remove-tag", "cat or dog", "dog"]);
//! assert!(matches!(cli.command, Commands::RemoveTag { .. }));
//! ```

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tagsieve")]
#[command(about = "Parse, evaluate and rewrite tag search queries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Output format (overrides config)
    #[arg(long = "format", value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Show debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show how a query is understood
    #[command(visible_alias = "p")]
    Parse {
        /// Query text
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Print ids of records matching a query
    #[command(visible_alias = "s")]
    Search {
        /// Query text
        #[arg(value_name = "QUERY")]
        query: String,

        #[command(flatten)]
        records: RecordsArgs,
    },

    /// Remove every occurrence of a tag from query text
    RemoveTag {
        /// Query text
        #[arg(value_name = "QUERY")]
        query: String,

        /// Tag to remove
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Append a tag to query text
    AddTag {
        /// Query text
        #[arg(value_name = "QUERY")]
        query: String,

        /// Tag to add
        #[arg(value_name = "TAG")]
        tag: String,

        /// Add the tag as an exclusion (`-TAG`)
        #[arg(short = 'e', long = "exclude")]
        exclude: bool,
    },

    /// Parse a tag-count value such as `>5`, `1..10` or `1,2,3`
    TagCount {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },

    /// List tags in a record file with their usage counts
    Tags {
        #[command(flatten)]
        records: RecordsArgs,

        /// Only tags starting with this prefix
        #[arg(long = "prefix", value_name = "PREFIX")]
        prefix: Option<String>,
    },

    /// Suggest completions for the last token of a query
    Suggest {
        /// Query text as typed so far
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        #[command(flatten)]
        records: RecordsArgs,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Record file selection shared by commands that read records
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RecordsArgs {
    /// JSON record file (defaults to the configured one)
    #[arg(short = 'r', long = "records", value_name = "FILE")]
    pub path: Option<PathBuf>,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key (records, quiet, format, suggestion_limit)
        #[arg(value_name = "KEY")]
        key: String,

        /// New value
        #[arg(value_name = "VALUE")]
        value: String,
    },
}
