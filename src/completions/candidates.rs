//! Static completion candidates
//!
//! These candidates never need a record collection: metatag keys, their
//! fixed value vocabularies, and configuration keys.

use crate::query::types::RATING_WORDS;
use serde::Serialize;

/// A completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// The value to insert
    pub value: String,
    /// Optional help text shown alongside
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Candidate {
    /// Create a new candidate with just a value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            help: None,
        }
    }

    /// Add help text to the candidate
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Known configuration keys for `config set`
#[must_use]
pub fn config_keys() -> Vec<Candidate> {
    vec![
        Candidate::new("records").with_help("Default record file (JSON)"),
        Candidate::new("quiet").with_help("Suppress informational output"),
        Candidate::new("format").with_help("Default output format: 'plain' or 'json'"),
        Candidate::new("suggestion_limit").with_help("Maximum number of suggestions"),
    ]
}

/// Metatag keys, as typed at the start of a token
#[must_use]
pub fn metatag_keys() -> Vec<Candidate> {
    vec![
        Candidate::new("rating:").with_help("Filter by rating (g, s, q, e)"),
        Candidate::new("is:").with_help("Filter by file type, or is:unrated"),
        Candidate::new("tagcount:").with_help("Filter by number of tags (5, >5, 1..10, 1,3)"),
        Candidate::new("account:").with_help("Only items from these accounts"),
        Candidate::new("-account:").with_help("Hide items from these accounts"),
    ]
}

/// Values accepted by `is:`
#[must_use]
pub fn is_values() -> Vec<Candidate> {
    vec![
        Candidate::new("png"),
        Candidate::new("jpg"),
        Candidate::new("jpeg"),
        Candidate::new("webp"),
        Candidate::new("gif"),
        Candidate::new("svg"),
        Candidate::new("unrated").with_help("Items without a rating"),
    ]
}

/// Values accepted by `rating:`: full words, then their codes
#[must_use]
pub fn rating_values() -> Vec<Candidate> {
    let words = RATING_WORDS.iter().map(|word| Candidate::new(*word));
    let codes = RATING_WORDS.iter().filter_map(|word| {
        word.chars()
            .next()
            .map(|code| Candidate::new(code.to_string()).with_help(*word))
    });
    words.chain(codes).collect()
}

/// Complete a token that is (or starts) a metatag
///
/// Before the colon, matching keys are offered; after it, the value
/// vocabulary for that key with the typed key kept as written.
#[must_use]
pub fn complete_metatag(current: &str) -> Vec<Candidate> {
    if let Some((key, value_so_far)) = current.split_once(':') {
        let values = match key.to_ascii_lowercase().as_str() {
            "is" => is_values(),
            "rating" => rating_values(),
            _ => vec![],
        };
        let value_so_far = value_so_far.to_ascii_lowercase();

        values
            .into_iter()
            .filter(|c| c.value.starts_with(&value_so_far))
            .map(|c| Candidate {
                value: format!("{key}:{}", c.value),
                help: c.help,
            })
            .collect()
    } else {
        let current = current.to_ascii_lowercase();
        metatag_keys()
            .into_iter()
            .filter(|c| c.value.starts_with(&current))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_keys_contains_records() {
        let keys = config_keys();
        assert!(keys.iter().any(|c| c.value == "records"));
        assert!(keys.iter().any(|c| c.value == "quiet"));
    }

    #[test]
    fn test_rating_values_include_words_and_codes() {
        let values = rating_values();
        assert!(values.iter().any(|c| c.value == "general"));
        assert!(values.iter().any(|c| c.value == "e" && c.help.as_deref() == Some("explicit")));
        assert_eq!(values.len(), 8);
    }

    #[test]
    fn test_complete_metatag_key() {
        let candidates = complete_metatag("rat");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, "rating:");

        let candidates = complete_metatag("-acc");
        assert_eq!(candidates[0].value, "-account:");
    }

    #[test]
    fn test_complete_metatag_key_case_insensitive() {
        let candidates = complete_metatag("TAGC");
        assert_eq!(candidates[0].value, "tagcount:");
    }

    #[test]
    fn test_complete_is_values() {
        let candidates = complete_metatag("is:");
        assert!(candidates.iter().any(|c| c.value == "is:png"));
        assert!(candidates.iter().any(|c| c.value == "is:unrated"));

        let candidates = complete_metatag("is:jp");
        let values: Vec<&str> = candidates.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["is:jpg", "is:jpeg"]);
    }

    #[test]
    fn test_complete_keeps_typed_key() {
        let candidates = complete_metatag("RATING:ge");
        assert_eq!(candidates[0].value, "RATING:general");
    }

    #[test]
    fn test_complete_unknown_key_is_empty() {
        assert!(complete_metatag("tagcount:").is_empty());
        assert!(complete_metatag("foo:").is_empty());
        assert!(complete_metatag("zzz").is_empty());
    }
}
