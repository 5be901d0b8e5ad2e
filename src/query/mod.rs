//! Tag query language
//!
//! A flat, Danbooru-style search syntax typed into a single box:
//!
//! ```text
//! anime girl long_hair or short_hair -realistic rating:g,s is:png tagcount:3..10
//! ```
//!
//! - plain tokens are required tags
//! - `-tag` excludes a tag
//! - `a or b` requires at least one of the alternatives (chains fold together)
//! - `rating:`, `is:`, `tagcount:`, `account:` / `-account:` are metatags
//!
//! Parsing never fails: clauses that are incomplete or malformed become
//! ordinary tags, so a half-typed query still searches.
//!
//! # Pipeline
//!
//! ```text
//! text ─► metatags::extract ─► (fragments, residual)
//!                                  │            │
//!                                  │     tokens::parse_tokens
//!                                  ▼            ▼
//!                             parse() assembles StructuredFilter ─► matches()
//! ```
//!
//! [`remove_tag`] works directly on the text and does not use this pipeline.

pub mod evaluator;
pub mod metatags;
pub mod mutator;
pub mod tag_count;
pub mod tokens;
pub mod types;

pub use evaluator::{EvaluableRecord, RecordFilterExt, RecordView, matches};
pub use metatags::{MetatagFragments, extract};
pub use mutator::{add_tag, exclude_tag, remove_tag};
pub use tag_count::parse_tag_count;
pub use tokens::{TagTokens, parse_tokens};
pub use types::{CmpOp, StructuredFilter, TagCount};

/// Parse query text into a [`StructuredFilter`]
///
/// # Examples
/// ```
/// use tagsieve::query::{parse, TagCount};
///
/// let filter = parse("cat or dog -fox rating:general tagcount:>2");
/// assert_eq!(filter.or_groups, vec![vec!["cat", "dog"]]);
/// assert_eq!(filter.exclude_tags, vec!["fox"]);
/// assert!(filter.ratings.contains(&'g'));
/// assert!(matches!(filter.tag_count, Some(TagCount::Cmp { value: 2, .. })));
/// ```
#[must_use]
pub fn parse(query: &str) -> StructuredFilter {
    let (fragments, residual) = extract(query);
    let tokens = parse_tokens(&residual);

    StructuredFilter {
        include_tags: tokens.include_tags,
        exclude_tags: tokens.exclude_tags,
        or_groups: tokens.or_groups,
        ratings: fragments.ratings,
        include_unrated: fragments.include_unrated,
        file_types: fragments.file_types,
        tag_count: fragments.tag_count,
        accounts: fragments.accounts,
        exclude_accounts: fragments.exclude_accounts,
    }
}
