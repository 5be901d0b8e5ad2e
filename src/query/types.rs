//! Structured filter and tag-count types
//!
//! These are the typed results of parsing a query string. They are plain
//! value objects: a fresh [`StructuredFilter`] is produced by every call to
//! [`crate::query::parse`] and nothing in this crate mutates one afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Comparison operator used by `tagcount:>5` style clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CmpOp {
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl CmpOp {
    /// Textual form as written in a query
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }

    /// Apply the operator as `lhs <op> rhs`
    #[must_use]
    pub const fn compare(self, lhs: u32, rhs: u32) -> bool {
        match self {
            Self::Greater => lhs > rhs,
            Self::Less => lhs < rhs,
            Self::GreaterOrEqual => lhs >= rhs,
            Self::LessOrEqual => lhs <= rhs,
        }
    }

    /// Parse an operator symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Self::Greater),
            "<" => Some(Self::Less),
            ">=" => Some(Self::GreaterOrEqual),
            "<=" => Some(Self::LessOrEqual),
            _ => None,
        }
    }
}

/// Filter on the number of tags attached to a record
///
/// `Range` always holds `min <= max`, whatever order the query used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TagCount {
    Exact { value: u32 },
    Cmp { op: CmpOp, value: u32 },
    Range { min: u32, max: u32 },
    List { values: Vec<u32> },
}

impl TagCount {
    /// Build a range, normalizing reversed bounds
    #[must_use]
    pub fn range(a: u32, b: u32) -> Self {
        Self::Range {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Check a record's tag count against this filter
    #[must_use]
    pub fn accepts(&self, count: u32) -> bool {
        match self {
            Self::Exact { value } => count == *value,
            Self::Cmp { op, value } => op.compare(count, *value),
            Self::Range { min, max } => count >= *min && count <= *max,
            Self::List { values } => values.contains(&count),
        }
    }
}

impl fmt::Display for TagCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { value } => write!(f, "{value}"),
            Self::Cmp { op, value } => write!(f, "{}{value}", op.as_str()),
            Self::Range { min, max } => write!(f, "{min}..{max}"),
            Self::List { values } => {
                let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "{}", joined.join(","))
            }
        }
    }
}

/// The parsed, typed representation of a query
///
/// Every field is vacuous when empty, so `StructuredFilter::default()`
/// matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredFilter {
    /// Tags that must all be present
    #[serde(default)]
    pub include_tags: Vec<String>,

    /// Tags that must all be absent
    #[serde(default)]
    pub exclude_tags: Vec<String>,

    /// Groups of alternatives; each group needs at least one hit
    #[serde(default)]
    pub or_groups: Vec<Vec<String>>,

    /// Accepted single-character rating codes
    #[serde(default)]
    pub ratings: BTreeSet<char>,

    /// Also accept records without a rating
    #[serde(default)]
    pub include_unrated: bool,

    /// Accepted canonical MIME types
    #[serde(default)]
    pub file_types: BTreeSet<String>,

    /// Constraint on the number of tags
    #[serde(default)]
    pub tag_count: Option<TagCount>,

    /// Accepted account identifiers
    #[serde(default)]
    pub accounts: BTreeSet<String>,

    /// Rejected account identifiers
    #[serde(default)]
    pub exclude_accounts: BTreeSet<String>,
}

impl StructuredFilter {
    /// True when the filter constrains nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl fmt::Display for StructuredFilter {
    /// Render the filter back as canonical query text
    ///
    /// This is a normalized form (plain tags, OR-groups, exclusions, then
    /// metatags); it is not guaranteed to equal the text that was parsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.include_tags.clone();

        parts.extend(self.or_groups.iter().map(|group| group.join(" or ")));

        // `-dog or cat` records `dog` as an exclusion too; the group already renders it
        let mut grouped_exclusions: Vec<&str> = self
            .or_groups
            .iter()
            .flatten()
            .filter_map(|member| member.strip_prefix('-'))
            .filter(|tag| !tag.is_empty())
            .collect();
        for tag in &self.exclude_tags {
            if let Some(pos) = grouped_exclusions.iter().position(|grouped| *grouped == tag.as_str()) {
                grouped_exclusions.swap_remove(pos);
            } else {
                parts.push(format!("-{tag}"));
            }
        }

        if !self.ratings.is_empty() {
            let codes: Vec<String> = self.ratings.iter().map(ToString::to_string).collect();
            parts.push(format!("rating:{}", codes.join(",")));
        }
        if self.include_unrated {
            parts.push("is:unrated".to_string());
        }
        for mime in &self.file_types {
            if let Some(keyword) = file_type_keyword(mime) {
                parts.push(format!("is:{keyword}"));
            }
        }
        if let Some(count) = &self.tag_count {
            parts.push(format!("tagcount:{count}"));
        }
        if !self.accounts.is_empty() {
            let ids: Vec<&str> = self.accounts.iter().map(String::as_str).collect();
            parts.push(format!("account:{}", ids.join(",")));
        }
        if !self.exclude_accounts.is_empty() {
            let ids: Vec<&str> = self.exclude_accounts.iter().map(String::as_str).collect();
            parts.push(format!("-account:{}", ids.join(",")));
        }

        write!(f, "{}", parts.join(" "))
    }
}

/// Rating words accepted by `rating:` and the code each maps to
pub const RATING_WORDS: [&str; 4] = ["general", "sensitive", "questionable", "explicit"];

/// Map an `is:` keyword to its canonical MIME type
///
/// `unrated` is not a file type and returns `None`.
#[must_use]
pub fn mime_for_keyword(keyword: &str) -> Option<&'static str> {
    match keyword {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Inverse of [`mime_for_keyword`], preferring the short keyword
#[must_use]
pub fn file_type_keyword(mime: &str) -> Option<&'static str> {
    match mime {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        "image/svg+xml" => Some("svg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalizes_bounds() {
        assert_eq!(TagCount::range(10, 1), TagCount::Range { min: 1, max: 10 });
        assert_eq!(TagCount::range(3, 3), TagCount::Range { min: 3, max: 3 });
    }

    #[test]
    fn test_tag_count_accepts() {
        assert!(TagCount::Exact { value: 4 }.accepts(4));
        assert!(!TagCount::Exact { value: 4 }.accepts(5));

        let gt = TagCount::Cmp { op: CmpOp::Greater, value: 5 };
        assert!(gt.accepts(6));
        assert!(!gt.accepts(5));

        let le = TagCount::Cmp { op: CmpOp::LessOrEqual, value: 5 };
        assert!(le.accepts(5));
        assert!(!le.accepts(6));

        let range = TagCount::range(3, 10);
        assert!(range.accepts(3));
        assert!(range.accepts(10));
        assert!(!range.accepts(11));

        let list = TagCount::List { values: vec![1, 3, 5] };
        assert!(list.accepts(3));
        assert!(!list.accepts(2));
    }

    #[test]
    fn test_tag_count_display() {
        assert_eq!(TagCount::Exact { value: 7 }.to_string(), "7");
        assert_eq!(
            TagCount::Cmp { op: CmpOp::GreaterOrEqual, value: 2 }.to_string(),
            ">=2"
        );
        assert_eq!(TagCount::range(10, 1).to_string(), "1..10");
        assert_eq!(TagCount::List { values: vec![1, 1, 2] }.to_string(), "1,1,2");
    }

    #[test]
    fn test_tag_count_serializes_with_kind() {
        let json = serde_json::to_value(TagCount::Cmp { op: CmpOp::Less, value: 3 }).unwrap();
        assert_eq!(json["kind"], "cmp");
        assert_eq!(json["op"], "<");
        assert_eq!(json["value"], 3);
    }

    #[test]
    fn test_default_filter_is_empty() {
        assert!(StructuredFilter::default().is_empty());

        let filter = StructuredFilter {
            include_unrated: true,
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_display_canonical_order() {
        let filter = StructuredFilter {
            include_tags: vec!["anime".into()],
            exclude_tags: vec!["realistic".into()],
            or_groups: vec![vec!["cat".into(), "dog".into()]],
            ratings: ['s', 'g'].into_iter().collect(),
            file_types: ["image/png".to_string()].into_iter().collect(),
            tag_count: Some(TagCount::range(3, 10)),
            ..Default::default()
        };

        assert_eq!(
            filter.to_string(),
            "anime cat or dog -realistic rating:g,s is:png tagcount:3..10"
        );
    }

    #[test]
    fn test_mime_keyword_mapping() {
        assert_eq!(mime_for_keyword("jpeg"), Some("image/jpeg"));
        assert_eq!(mime_for_keyword("jpg"), Some("image/jpeg"));
        assert_eq!(mime_for_keyword("svg"), Some("image/svg+xml"));
        assert_eq!(mime_for_keyword("unrated"), None);
        assert_eq!(file_type_keyword("image/jpeg"), Some("jpg"));
        assert_eq!(file_type_keyword("video/mp4"), None);
    }
}
