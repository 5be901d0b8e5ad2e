//! Tagsieve - a Danbooru-style tag query language
//!
//! This library parses search box text such as
//! `girl long_hair or short_hair -realistic rating:g,s tagcount:>3` into a
//! [`StructuredFilter`], evaluates it against tagged media records, and
//! rewrites query text when a tag is removed or added.
//!
//! Parsing never fails; see [`query`] for the grammar.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod output;
pub mod query;
pub mod records;

#[cfg(test)]
pub mod testing;

pub use query::{
    EvaluableRecord, RecordFilterExt, RecordView, StructuredFilter, TagCount, matches, parse,
    parse_tag_count, remove_tag,
};
pub use records::{MediaRecord, RecordsError, load_records};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagsieveError {
    /// Loading a record collection failed
    #[error("Records error: {0}")]
    RecordsError(#[from] records::RecordsError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
