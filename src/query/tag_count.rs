//! `tagcount:` value grammar
//!
//! Two forms are accepted, tried in this order:
//!
//! - a list of two or more comma-separated integers: `1,3,5`
//! - an optional operator, an integer and an optional `..` upper bound:
//!   `7`, `>5`, `<=2`, `3..10`, `10..3`
//!
//! The list form goes first so `1,3,5` is never read as `1` plus garbage.

use super::types::{CmpOp, TagCount};

/// Operators in match order; two-character symbols must precede their prefixes
const OPERATORS: [&str; 4] = [">=", "<=", ">", "<"];

/// Parse the value part of a `tagcount:` clause
///
/// Returns `None` for anything outside the grammar (negative numbers, stray
/// characters, values that overflow `u32`); the caller then leaves the clause
/// in the query as an ordinary tag.
///
/// # Examples
/// ```
/// use tagsieve::query::{parse_tag_count, CmpOp, TagCount};
///
/// assert_eq!(parse_tag_count("1,3,5"), Some(TagCount::List { values: vec![1, 3, 5] }));
/// assert_eq!(parse_tag_count("10..1"), Some(TagCount::Range { min: 1, max: 10 }));
/// assert_eq!(parse_tag_count(">5"), Some(TagCount::Cmp { op: CmpOp::Greater, value: 5 }));
/// assert_eq!(parse_tag_count("abc"), None);
/// ```
#[must_use]
pub fn parse_tag_count(value: &str) -> Option<TagCount> {
    parse_list(value).or_else(|| parse_comparison(value))
}

fn parse_list(value: &str) -> Option<TagCount> {
    if !value.contains(',') {
        return None;
    }

    let values = value
        .split(',')
        .map(parse_number)
        .collect::<Option<Vec<u32>>>()?;

    // split on a string containing a comma always yields two or more parts
    Some(TagCount::List { values })
}

fn parse_comparison(value: &str) -> Option<TagCount> {
    let (op, rest) = OPERATORS
        .iter()
        .find_map(|symbol| {
            value
                .strip_prefix(symbol)
                .map(|rest| (CmpOp::from_symbol(symbol), rest))
        })
        .unwrap_or((None, value));

    if let Some((low, high)) = rest.split_once("..") {
        let low = parse_number(low)?;
        let high = parse_number(high)?;
        return Some(TagCount::range(low, high));
    }

    let number = parse_number(rest)?;
    Some(match op {
        Some(op) => TagCount::Cmp { op, value: number },
        None => TagCount::Exact { value: number },
    })
}

/// Digits only; `str::parse` alone would also take a leading `+`
fn parse_number(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
