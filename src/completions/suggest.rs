//! Search box suggestions
//!
//! Completes the token currently being typed, the last one in the query.

use super::candidates::{Candidate, complete_metatag};
use crate::catalog::TagCatalog;

/// Suggest completions for the last token of `query`
///
/// Metatag candidates come first, then catalog tags starting with the typed
/// text, most used first. A leading `-` is kept on tag suggestions. A query
/// that is empty or ends in whitespace has no token being typed and gets no
/// suggestions.
#[must_use]
pub fn suggest(query: &str, catalog: &TagCatalog, limit: usize) -> Vec<Candidate> {
    if query.is_empty() || query.ends_with(char::is_whitespace) {
        return Vec::new();
    }
    let Some(current) = query.split_whitespace().next_back() else {
        return Vec::new();
    };

    let mut candidates = complete_metatag(current);

    // a token with a colon may still be a plain tag such as `artist:name`
    let (negation, stem) = match current.strip_prefix('-') {
        Some(stem) => ("-", stem),
        None => ("", current),
    };
    if !stem.is_empty() {
        candidates.extend(catalog.with_prefix(stem).map(|usage| {
            Candidate::new(format!("{negation}{}", usage.tag))
                .with_help(format!("{} record(s)", usage.count))
        }));
    }

    candidates.truncate(limit);
    candidates
}
