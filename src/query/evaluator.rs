//! Filter evaluation against records
//!
//! Any stored item can be matched once it exposes a borrowed [`RecordView`]
//! through [`EvaluableRecord`]:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  EvaluableRecord                     │  ← adaptation layer
//! │  - as_view() -> RecordView<'_>       │
//! └──────────────────────────────────────┘
//!            ▲ implements
//!    ┌───────┴────────┬─────────────┐
//!  MediaRecord    RecordView    CustomType
//!
//! ┌──────────────────────────────────────┐
//! │  RecordFilterExt                     │  ← batch filtering
//! │  - apply_query(&StructuredFilter)    │
//! └──────────────────────────────────────┘
//! ```

use super::types::StructuredFilter;

/// Borrowed view of the record fields the evaluator reads
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    pub tags: &'a [String],
    pub rating: Option<char>,
    pub mime_type: &'a str,
    pub tag_count: u32,
    pub account: Option<&'a str>,
}

impl<'a> RecordView<'a> {
    /// View over `tags`, counting them for `tag_count`
    #[must_use]
    pub fn new(tags: &'a [String], mime_type: &'a str) -> Self {
        Self {
            tags,
            rating: None,
            mime_type,
            tag_count: u32::try_from(tags.len()).unwrap_or(u32::MAX),
            account: None,
        }
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: Option<char>) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub const fn with_account(mut self, account: Option<&'a str>) -> Self {
        self.account = account;
        self
    }

    #[must_use]
    pub const fn with_tag_count(mut self, tag_count: u32) -> Self {
        self.tag_count = tag_count;
        self
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Types that can be matched against a [`StructuredFilter`]
///
/// ```ignore
/// impl EvaluableRecord for Bookmark {
///     fn as_view(&self) -> RecordView<'_> {
///         RecordView::new(&self.tags, &self.mime).with_rating(self.rating)
///     }
/// }
/// ```
pub trait EvaluableRecord {
    fn as_view(&self) -> RecordView<'_>;
}

impl EvaluableRecord for RecordView<'_> {
    fn as_view(&self) -> RecordView<'_> {
        *self
    }
}

impl<T: EvaluableRecord + ?Sized> EvaluableRecord for &T {
    fn as_view(&self) -> RecordView<'_> {
        (**self).as_view()
    }
}

/// Decide whether `record` satisfies every clause of `filter`
///
/// Empty filter fields are vacuously true. The set-membership clauses run
/// before the tag scans.
#[must_use]
pub fn matches<R: EvaluableRecord + ?Sized>(filter: &StructuredFilter, record: &R) -> bool {
    let view = record.as_view();

    rating_matches(filter, &view)
        && file_type_matches(filter, &view)
        && tag_count_matches(filter, &view)
        && account_matches(filter, &view)
        && tags_match(filter, &view)
}

/// Rating codes compare case-insensitively; queries store them lowercase
fn rating_matches(filter: &StructuredFilter, view: &RecordView<'_>) -> bool {
    if filter.ratings.is_empty() && !filter.include_unrated {
        return true;
    }
    match view.rating {
        None => filter.include_unrated,
        Some(code) => filter.ratings.contains(&code.to_ascii_lowercase()),
    }
}

fn file_type_matches(filter: &StructuredFilter, view: &RecordView<'_>) -> bool {
    filter.file_types.is_empty() || filter.file_types.contains(view.mime_type)
}

fn tag_count_matches(filter: &StructuredFilter, view: &RecordView<'_>) -> bool {
    filter
        .tag_count
        .as_ref()
        .is_none_or(|count| count.accepts(view.tag_count))
}

/// A record without an account never satisfies a non-empty `accounts` set
fn account_matches(filter: &StructuredFilter, view: &RecordView<'_>) -> bool {
    let included = filter.accounts.is_empty()
        || view
            .account
            .is_some_and(|account| filter.accounts.contains(account));
    let excluded = view
        .account
        .is_some_and(|account| filter.exclude_accounts.contains(account));

    included && !excluded
}

fn tags_match(filter: &StructuredFilter, view: &RecordView<'_>) -> bool {
    filter.include_tags.iter().all(|tag| view.has_tag(tag))
        && filter
            .or_groups
            .iter()
            .all(|group| group.iter().any(|tag| view.has_tag(tag)))
        && !filter.exclude_tags.iter().any(|tag| view.has_tag(tag))
}

/// Extension trait for filtering record collections in memory
///
/// ```ignore
/// let filter = tagsieve::query::parse("cat -dog rating:g");
/// let hits: Vec<_> = records.apply_query(&filter).collect();
/// ```
pub trait RecordFilterExt<T: EvaluableRecord> {
    /// Iterate over the records that match `filter`, in collection order
    fn apply_query<'a>(&'a self, filter: &'a StructuredFilter) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a;
}

impl<T: EvaluableRecord> RecordFilterExt<T> for [T] {
    fn apply_query<'a>(&'a self, filter: &'a StructuredFilter) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter().filter(move |record| matches(filter, *record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::types::{CmpOp, TagCount};
    use crate::testing::RecordBuilder;
    use std::collections::BTreeSet;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = StructuredFilter::default();
        let unrated = RecordBuilder::new("1").build();
        let rated = RecordBuilder::new("2")
            .tags(&["cat"])
            .rating('e')
            .account("bob")
            .build();

        assert!(matches(&filter, &unrated));
        assert!(matches(&filter, &rated));
    }

    #[test]
    fn test_include_tags_are_conjunctive() {
        let filter = StructuredFilter {
            include_tags: tags(&["cat", "hat"]),
            ..Default::default()
        };
        assert!(matches(&filter, &RecordBuilder::new("1").tags(&["hat", "cat", "bat"]).build()));
        assert!(!matches(&filter, &RecordBuilder::new("2").tags(&["cat"]).build()));
    }

    #[test]
    fn test_exclude_tags() {
        let filter = StructuredFilter {
            exclude_tags: tags(&["dog"]),
            ..Default::default()
        };
        assert!(matches(&filter, &RecordBuilder::new("1").tags(&["cat"]).build()));
        assert!(!matches(&filter, &RecordBuilder::new("2").tags(&["cat", "dog"]).build()));
    }

    #[test]
    fn test_or_groups_need_one_hit_each() {
        let filter = StructuredFilter {
            or_groups: vec![tags(&["girl", "cat"]), tags(&["red", "blue"])],
            ..Default::default()
        };
        assert!(matches(&filter, &RecordBuilder::new("1").tags(&["cat", "blue"]).build()));
        assert!(matches(&filter, &RecordBuilder::new("2").tags(&["girl", "cat", "red"]).build()));
        assert!(!matches(&filter, &RecordBuilder::new("3").tags(&["cat"]).build()));
        assert!(!matches(&filter, &RecordBuilder::new("4").tags(&["red"]).build()));
    }

    #[test]
    fn test_rating_clause() {
        let filter = StructuredFilter {
            ratings: BTreeSet::from(['g', 's']),
            ..Default::default()
        };
        assert!(matches(&filter, &RecordBuilder::new("1").rating('g').build()));
        assert!(!matches(&filter, &RecordBuilder::new("2").rating('e').build()));
        assert!(!matches(&filter, &RecordBuilder::new("3").build()));
    }

    #[test]
    fn test_unrated_only() {
        let filter = StructuredFilter {
            include_unrated: true,
            ..Default::default()
        };
        assert!(matches(&filter, &RecordBuilder::new("1").build()));
        assert!(!matches(&filter, &RecordBuilder::new("2").rating('g').build()));
    }

    #[test]
    fn test_unrated_or_rating() {
        let filter = StructuredFilter {
            ratings: BTreeSet::from(['e']),
            include_unrated: true,
            ..Default::default()
        };
        assert!(matches(&filter, &RecordBuilder::new("1").build()));
        assert!(matches(&filter, &RecordBuilder::new("2").rating('e').build()));
        assert!(!matches(&filter, &RecordBuilder::new("3").rating('g').build()));
    }

    #[test]
    fn test_file_type_clause() {
        let filter = StructuredFilter {
            file_types: BTreeSet::from(["image/png".to_string()]),
            ..Default::default()
        };
        assert!(matches(&filter, &RecordBuilder::new("1").mime("image/png").build()));
        assert!(!matches(&filter, &RecordBuilder::new("2").mime("image/gif").build()));
    }

    #[test]
    fn test_tag_count_clause() {
        let record = RecordBuilder::new("1").tags(&["a", "b", "c"]).build();

        let exact = StructuredFilter {
            tag_count: Some(TagCount::Exact { value: 3 }),
            ..Default::default()
        };
        let over = StructuredFilter {
            tag_count: Some(TagCount::Cmp { op: CmpOp::Greater, value: 3 }),
            ..Default::default()
        };
        let listed = StructuredFilter {
            tag_count: Some(TagCount::List { values: vec![1, 3] }),
            ..Default::default()
        };
        let ranged = StructuredFilter {
            tag_count: Some(TagCount::range(5, 2)),
            ..Default::default()
        };

        assert!(matches(&exact, &record));
        assert!(!matches(&over, &record));
        assert!(matches(&listed, &record));
        assert!(matches(&ranged, &record));
    }

    #[test]
    fn test_account_include_and_exclude() {
        let include = StructuredFilter {
            accounts: BTreeSet::from(["alice".to_string()]),
            ..Default::default()
        };
        assert!(matches(&include, &RecordBuilder::new("1").account("alice").build()));
        assert!(!matches(&include, &RecordBuilder::new("2").account("bob").build()));
        assert!(!matches(&include, &RecordBuilder::new("3").build()));

        let exclude = StructuredFilter {
            exclude_accounts: BTreeSet::from(["spam".to_string()]),
            ..Default::default()
        };
        assert!(matches(&exclude, &RecordBuilder::new("4").account("alice").build()));
        assert!(matches(&exclude, &RecordBuilder::new("5").build()));
        assert!(!matches(&exclude, &RecordBuilder::new("6").account("spam").build()));
    }

    #[test]
    fn test_record_view_directly() {
        let tag_list = tags(&["cat"]);
        let view = RecordView::new(&tag_list, "image/png").with_rating(Some('g'));
        let filter = StructuredFilter {
            include_tags: tags(&["cat"]),
            ratings: BTreeSet::from(['g']),
            tag_count: Some(TagCount::Exact { value: 1 }),
            ..Default::default()
        };
        assert!(matches(&filter, &view));
        assert!(!matches(&filter, &view.with_tag_count(4)));
    }

    #[test]
    fn test_uppercase_view_rating_matches_lowercase_clause() {
        let tag_list = tags(&["cat"]);
        let view = RecordView::new(&tag_list, "image/png").with_rating(Some('G'));
        let filter = StructuredFilter {
            ratings: BTreeSet::from(['g']),
            ..Default::default()
        };
        assert!(matches(&filter, &view));
        assert!(!matches(&filter, &view.with_rating(Some('S'))));
    }

    #[test]
    fn test_apply_query_keeps_order() {
        let records = vec![
            RecordBuilder::new("a").tags(&["cat"]).build(),
            RecordBuilder::new("b").tags(&["dog"]).build(),
            RecordBuilder::new("c").tags(&["cat", "dog"]).build(),
        ];
        let filter = StructuredFilter {
            include_tags: tags(&["cat"]),
            ..Default::default()
        };

        let ids: Vec<&str> = records
            .apply_query(&filter)
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
