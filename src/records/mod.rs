//! Media records as consumed by the query evaluator
//!
//! Storage lives outside this crate. What arrives here is a read-only list of
//! bookmarked items, either built in memory by the host application or read
//! from a JSON export:
//!
//! ```json
//! [
//!   { "id": "42", "tags": ["cat", "hat"], "rating": "g",
//!     "mime_type": "image/png", "account": "alice" }
//! ]
//! ```

pub mod error;

pub use error::RecordsError;

use crate::query::types::RATING_WORDS;
use crate::query::{EvaluableRecord, RecordView};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A bookmarked media item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Storage key of the item
    pub id: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Single-character rating code, if the item was rated
    ///
    /// Files may also store the full word (`"general"`); it is read as its code.
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<char>,

    #[serde(default)]
    pub mime_type: String,

    /// Account the item was saved from
    #[serde(default)]
    pub account: Option<String>,
}

impl MediaRecord {
    /// Create an untagged, unrated record
    #[must_use]
    pub fn new(id: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: Vec::new(),
            rating: None,
            mime_type: mime_type.into(),
            account: None,
        }
    }
}

impl EvaluableRecord for MediaRecord {
    /// Rating codes are compared lowercase, matching how queries normalize them
    fn as_view(&self) -> RecordView<'_> {
        RecordView::new(&self.tags, &self.mime_type)
            .with_rating(self.rating.map(|code| code.to_ascii_lowercase()))
            .with_account(self.account.as_deref())
    }
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let mut chars = value.chars();
    if let (Some(code), None) = (chars.next(), chars.next()) {
        return Ok(Some(code));
    }
    RATING_WORDS
        .iter()
        .find(|word| word.eq_ignore_ascii_case(&value))
        .and_then(|word| word.chars().next())
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("unknown rating '{value}'")))
}

/// Read a JSON array of records
///
/// # Errors
///
/// Returns `RecordsError::Io` if the file cannot be read and
/// `RecordsError::Parse` if it does not hold a JSON array of records.
pub fn load_records(path: &Path) -> Result<Vec<MediaRecord>, RecordsError> {
    let data = fs::read_to_string(path).map_err(|source| RecordsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<MediaRecord> =
        serde_json::from_str(&data).map_err(|source| RecordsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), count = records.len(), "records loaded");
    Ok(records)
}
