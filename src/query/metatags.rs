//! Metatag extraction
//!
//! Pulls the typed `key:value` clauses out of a query before tag tokenizing.
//! Passes run in a fixed order and each one deletes what it consumed, so a
//! later pass never sees text an earlier pass already claimed:
//!
//! 1. `tagcount:` (see [`super::tag_count`])
//! 2. `rating:`
//! 3. `is:`
//! 4. `account:` / `-account:`
//!
//! Keywords are case-insensitive. A clause whose value does not validate is
//! left in place and later becomes an ordinary tag token.

use super::tag_count::parse_tag_count;
use super::types::{RATING_WORDS, TagCount, mime_for_keyword};
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::LazyLock;

static TAG_COUNT_CLAUSE: LazyLock<Regex> = LazyLock::new(|| clause_regex("tagcount:"));
static RATING_CLAUSE: LazyLock<Regex> = LazyLock::new(|| clause_regex("rating:"));
static IS_CLAUSE: LazyLock<Regex> = LazyLock::new(|| clause_regex("is:"));
static ACCOUNT_CLAUSE: LazyLock<Regex> = LazyLock::new(|| clause_regex("(?P<neg>-?)account:"));

/// A clause only starts at the beginning of the text or after whitespace,
/// so `my_rating:g` or `foo-is:png` stay plain tags.
fn clause_regex(key: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?P<lead>^|\s){key}(?P<value>\S+)"))
        .expect("metatag clause pattern is valid")
}

/// Typed values collected from metatag clauses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetatagFragments {
    /// Last valid `tagcount:` clause
    pub tag_count: Option<TagCount>,
    pub ratings: BTreeSet<char>,
    pub include_unrated: bool,
    pub file_types: BTreeSet<String>,
    pub accounts: BTreeSet<String>,
    pub exclude_accounts: BTreeSet<String>,
}

/// Split a query into metatag fragments and the residual tag text
///
/// The residual text has its whitespace collapsed to single spaces and is
/// trimmed.
///
/// # Examples
/// ```
/// use tagsieve::query::extract;
///
/// let (fragments, residual) = extract("cat rating:g is:png  dog");
/// assert_eq!(residual, "cat dog");
/// assert!(fragments.ratings.contains(&'g'));
/// assert!(fragments.file_types.contains("image/png"));
/// ```
#[must_use]
pub fn extract(text: &str) -> (MetatagFragments, String) {
    let mut fragments = MetatagFragments::default();

    let text = strip_clauses(text, &TAG_COUNT_CLAUSE, |caps| {
        parse_tag_count(&caps["value"]).is_some_and(|count| {
            fragments.tag_count = Some(count);
            true
        })
    });

    let text = strip_clauses(&text, &RATING_CLAUSE, |caps| {
        parse_rating_value(&caps["value"]).is_some_and(|codes| {
            fragments.ratings.extend(codes);
            true
        })
    });

    let text = strip_clauses(&text, &IS_CLAUSE, |caps| {
        let value = caps["value"].to_ascii_lowercase();
        if value == "unrated" {
            fragments.include_unrated = true;
            return true;
        }
        mime_for_keyword(&value).is_some_and(|mime| {
            fragments.file_types.insert(mime.to_string());
            true
        })
    });

    let text = strip_clauses(&text, &ACCOUNT_CLAUSE, |caps| {
        parse_account_list(&caps["value"]).is_some_and(|ids| {
            if caps["neg"].is_empty() {
                fragments.accounts.extend(ids);
            } else {
                fragments.exclude_accounts.extend(ids);
            }
            true
        })
    });

    let residual = text.split_whitespace().collect::<Vec<_>>().join(" ");
    tracing::trace!(?fragments, residual = %residual, "metatags extracted");
    (fragments, residual)
}

/// Remove every clause the `accept` callback claims, keep the rest verbatim
fn strip_clauses<F>(text: &str, pattern: &Regex, mut accept: F) -> String
where
    F: FnMut(&Captures<'_>) -> bool,
{
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            if accept(caps) {
                caps["lead"].to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// `general` style words, or comma-separated single-letter codes
fn parse_rating_value(value: &str) -> Option<Vec<char>> {
    let lower = value.to_ascii_lowercase();

    if RATING_WORDS.contains(&lower.as_str()) {
        return lower.chars().next().map(|code| vec![code]);
    }

    lower
        .split(',')
        .map(|part| {
            let mut chars = part.chars();
            match (chars.next(), chars.next()) {
                (Some(code), None) if code.is_ascii_alphabetic() => Some(code),
                _ => None,
            }
        })
        .collect()
}

fn parse_account_list(value: &str) -> Option<Vec<String>> {
    value
        .split(',')
        .map(|id| {
            let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            valid.then(|| id.to_string())
        })
        .collect()
}
