//! Tag frequency catalog
//!
//! Counts how many records carry each tag. The search box uses it to offer
//! completions and the CLI `tags` command lists it.

use crate::query::EvaluableRecord;
use serde::Serialize;
use std::collections::HashMap;

/// A tag and the number of records carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagUsage {
    pub tag: String,
    pub count: usize,
}

/// Tag usage counts over a record collection
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    /// Most used first, ties broken by name
    entries: Vec<TagUsage>,
}

impl TagCatalog {
    /// Count tags across `records`
    ///
    /// A tag repeated on one record counts once for that record.
    pub fn from_records<'a, R, I>(records: I) -> Self
    where
        R: EvaluableRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut seen: Vec<&str> = Vec::new();

        for record in records {
            let view = record.as_view();
            seen.clear();
            for tag in view.tags {
                if !seen.contains(&tag.as_str()) {
                    seen.push(tag);
                    *counts.entry(tag).or_default() += 1;
                }
            }
        }

        let mut entries: Vec<TagUsage> = counts
            .into_iter()
            .map(|(tag, count)| TagUsage {
                tag: tag.to_string(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

        Self { entries }
    }

    /// All tags, most used first
    #[must_use]
    pub fn tags(&self) -> &[TagUsage] {
        &self.entries
    }

    /// Tags starting with `prefix`, most used first
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a TagUsage> + 'a {
        self.entries
            .iter()
            .filter(move |usage| usage.tag.starts_with(prefix))
    }

    /// Number of records carrying `tag`
    #[must_use]
    pub fn count(&self, tag: &str) -> usize {
        self.entries
            .iter()
            .find(|usage| usage.tag == tag)
            .map_or(0, |usage| usage.count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordBuilder, sample_records};

    #[test]
    fn test_counts_and_order() {
        let records = sample_records();
        let catalog = TagCatalog::from_records(&records);

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.tags()[0], TagUsage { tag: "cat".into(), count: 2 });
        // ties sorted by name
        let rest: Vec<&str> = catalog.tags()[1..].iter().map(|u| u.tag.as_str()).collect();
        assert_eq!(rest, vec!["car", "dog", "girl", "long_hair", "realistic"]);
    }

    #[test]
    fn test_duplicate_tag_on_one_record_counts_once() {
        let records = vec![RecordBuilder::new("1").tags(&["cat", "cat"]).build()];
        let catalog = TagCatalog::from_records(&records);
        assert_eq!(catalog.count("cat"), 1);
    }

    #[test]
    fn test_with_prefix() {
        let records = sample_records();
        let catalog = TagCatalog::from_records(&records);

        let tags: Vec<&str> = catalog.with_prefix("ca").map(|u| u.tag.as_str()).collect();
        assert_eq!(tags, vec!["cat", "car"]);
        assert_eq!(catalog.with_prefix("zzz").count(), 0);
    }

    #[test]
    fn test_empty_catalog() {
        let records: Vec<crate::records::MediaRecord> = Vec::new();
        let catalog = TagCatalog::from_records(&records);
        assert!(catalog.is_empty());
        assert_eq!(catalog.count("cat"), 0);
    }
}
