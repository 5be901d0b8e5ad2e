//! Tagsieve CLI application entry point
//!
//! A command-line front end for the tagsieve query language. It exposes the
//! parser, the evaluator and the query rewriting helpers over JSON record
//! files.
//!
//! # Usage
//!
//! ```bash
//! # Show how a query is understood
//! tagsieve parse "girl long_hair or short_hair -realistic rating:g,s"
//!
//! # Find matching records
//! tagsieve search "cat -dog is:png" --records items.json
//!
//! # Rewrite query text
//! tagsieve remove-tag "cat or dog or fox" dog
//! tagsieve add-tag "cat" dog --exclude
//!
//! # Complete the last token
//! tagsieve suggest "cat rat"
//!
//! # Quiet mode (only output results)
//! tagsieve -q search cat
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/tagsieve/config.toml` on Linux) and `TAGSIEVE_*` environment
//! variables. Logging is controlled by `RUST_LOG`.

use clap::CommandFactory;
use std::io;
use std::process::ExitCode;
use tagsieve::{
    TagsieveError,
    cli::{Cli, Commands},
    commands::{self, OutputOptions},
    completions,
    config::TagsieveConfig,
    output,
};

type Result<T> = std::result::Result<T, TagsieveError>;

fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = TagsieveConfig::config_path()?;
    let config = TagsieveConfig::load_from(&config_path)?;
    let options = OutputOptions::resolve(cli.quiet, cli.format, &config);

    match cli.command {
        Commands::Parse { query } => commands::query::parse(&query, options),
        Commands::Search { query, records } => {
            let path = commands::records_path(&records, &config)?;
            commands::search(&query, &path, options)
        }
        Commands::RemoveTag { query, tag } => commands::query::remove_tag(&query, &tag, options),
        Commands::AddTag {
            query,
            tag,
            exclude,
        } => commands::query::add_tag(&query, &tag, exclude, options),
        Commands::TagCount { value } => commands::query::tag_count(&value, options),
        Commands::Tags { records, prefix } => {
            let path = commands::records_path(&records, &config)?;
            commands::tags(&path, prefix.as_deref(), options)
        }
        Commands::Suggest { query, records } => {
            let path = records.path.or_else(|| config.records.clone());
            commands::suggest(&query, path.as_deref(), config.suggestion_limit, options)
        }
        Commands::Config { command } => commands::config(&command, config, &config_path, options),
        Commands::Completions { shell } => {
            completions::generate_static(shell, &mut Cli::command(), &mut io::stdout());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", output::error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
