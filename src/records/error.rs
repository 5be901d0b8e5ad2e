//! Record loading errors
//!
//! Raised only when reading a record collection from disk. Matching itself
//! never fails.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading records
#[derive(Debug, Error)]
pub enum RecordsError {
    /// The record file could not be read
    #[error("Failed to read records from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record file is not a JSON array of records
    #[error("Invalid record data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No record file was given and none is configured
    #[error("No record file specified (pass --records or set `records` in the config)")]
    NoSource,
}
