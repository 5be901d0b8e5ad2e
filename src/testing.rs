//! Testing utilities for tagsieve
//!
//! Fixture builders shared by the unit tests. Only available when compiled
//! with `cfg(test)`.

use crate::records::MediaRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fluent builder for [`MediaRecord`] fixtures
///
/// Records default to `image/png`, no tags, no rating and no account.
///
/// # Examples
/// ```ignore
/// let record = RecordBuilder::new("1").tags(&["cat"]).rating('g').build();
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: MediaRecord,
}

impl RecordBuilder {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            record: MediaRecord::new(id, "image/png"),
        }
    }

    #[must_use]
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.record.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub const fn rating(mut self, rating: char) -> Self {
        self.record.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn mime(mut self, mime_type: &str) -> Self {
        self.record.mime_type = mime_type.to_string();
        self
    }

    #[must_use]
    pub fn account(mut self, account: &str) -> Self {
        self.record.account = Some(account.to_string());
        self
    }

    #[must_use]
    pub fn build(self) -> MediaRecord {
        self.record
    }
}

/// A small mixed collection used by catalog and CLI tests
#[must_use]
pub fn sample_records() -> Vec<MediaRecord> {
    vec![
        RecordBuilder::new("1")
            .tags(&["cat", "girl", "long_hair"])
            .rating('g')
            .account("alice")
            .build(),
        RecordBuilder::new("2")
            .tags(&["cat", "dog"])
            .rating('s')
            .mime("image/jpeg")
            .build(),
        RecordBuilder::new("3")
            .tags(&["car", "realistic"])
            .mime("image/gif")
            .account("bob")
            .build(),
    ]
}

/// Temporary directory holding a JSON record file
///
/// The directory and file are removed when the value is dropped.
pub struct RecordFile {
    _dir: TempDir,
    path: PathBuf,
}

impl RecordFile {
    /// Write `records` as JSON into a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the directory or file cannot be created.
    #[must_use]
    pub fn new(records: &[MediaRecord]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("records.json");
        let data = serde_json::to_string_pretty(records).expect("Failed to serialize records");
        fs::write(&path, data).expect("Failed to write record file");
        Self { _dir: dir, path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
