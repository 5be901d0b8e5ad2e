//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args and prints its result. Rendering is split from printing so the text
//! can be checked in tests.

pub mod config;
pub mod query;
pub mod search;
pub mod suggest;
pub mod tags;

pub use self::config::execute as config;
pub use self::search::execute as search;
pub use self::suggest::execute as suggest;
pub use self::tags::execute as tags;

use crate::cli::RecordsArgs;
use crate::config::{OutputFormat, TagsieveConfig};
use crate::records::RecordsError;
use std::path::PathBuf;

/// Output settings resolved from flags and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    pub quiet: bool,
    pub format: OutputFormat,
}

impl OutputOptions {
    /// Command-line flags win over configured values
    #[must_use]
    pub fn resolve(quiet: bool, format: Option<OutputFormat>, config: &TagsieveConfig) -> Self {
        Self {
            quiet: quiet || config.quiet,
            format: format.unwrap_or(config.format),
        }
    }

    #[must_use]
    pub fn is_json(self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Pick the record file: the `--records` argument, else the configured one
///
/// # Errors
/// Returns `RecordsError::NoSource` when neither is set.
pub fn records_path(args: &RecordsArgs, config: &TagsieveConfig) -> Result<PathBuf, RecordsError> {
    args.path
        .clone()
        .or_else(|| config.records.clone())
        .ok_or(RecordsError::NoSource)
}
