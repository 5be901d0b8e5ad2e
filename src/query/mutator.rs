//! Text-level query rewriting
//!
//! These functions edit the raw query text token by token. They never go
//! through [`super::parse`], so metatags, spacing-insensitive tokens and
//! anything the parser would normalize are carried over verbatim. Output is
//! always joined with single spaces.

use super::tokens::is_or_keyword;

/// Remove every occurrence of `tag` from `query`
///
/// An `or` that joined the removed tag to a neighbour is dropped with it, so
/// no combinator is left dangling. When the tag sat inside a longer chain
/// (`a or b or c` without `b`) the survivors stay joined (`a or c`), also
/// when the tag is repeated in place (`a or b b or c`). Occurrences split by
/// other tokens are removed one at a time and do not rejoin their neighbours.
///
/// A tag that does not occur returns the whitespace-normalized query.
///
/// # Examples
/// ```
/// use tagsieve::query::remove_tag;
///
/// assert_eq!(remove_tag("girl or cat", "girl"), "cat");
/// assert_eq!(remove_tag("girl or cat", "cat"), "girl");
/// assert_eq!(remove_tag("girl cat", "girl"), "cat");
/// ```
#[must_use]
pub fn remove_tag(query: &str, tag: &str) -> String {
    let tokens: Vec<&str> = query.split_whitespace().collect();
    let mut output: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut pending_or_drop = false;

    for (i, &token) in tokens.iter().enumerate() {
        if token == tag {
            // adjacent repeats (`a or b b or c`) sit in one group, so look past them
            let after = tokens[i + 1..]
                .iter()
                .position(|&next| next != tag)
                .map_or(tokens.len(), |offset| i + 1 + offset);
            let joined_left = output.last().is_some_and(|prev| is_or_keyword(prev));
            let joined_right = tokens.get(after).is_some_and(|next| is_or_keyword(next))
                && tokens.get(after + 1).is_some();

            // inside a chain the left `or` now links the two neighbours
            if joined_left && !joined_right {
                output.pop();
            }
            pending_or_drop = true;
        } else if pending_or_drop && is_or_keyword(token) {
            pending_or_drop = false;
        } else {
            output.push(token);
            pending_or_drop = false;
        }
    }

    let rewritten = output.join(" ");
    tracing::trace!(query, tag, rewritten = %rewritten, "tag removed");
    rewritten
}

/// Append `tag` as a required tag
///
/// A query that already requires `tag` is returned normalized. An existing
/// `-tag` exclusion is removed first, since the two would contradict.
///
/// # Examples
/// ```
/// use tagsieve::query::add_tag;
///
/// assert_eq!(add_tag("cat -dog", "dog"), "cat dog");
/// assert_eq!(add_tag("cat", "cat"), "cat");
/// ```
#[must_use]
pub fn add_tag(query: &str, tag: &str) -> String {
    append_token(query, tag, &format!("-{tag}"))
}

/// Append `-tag` as an exclusion
///
/// A plain `tag` token is removed first (repairing any `or` it was part of).
///
/// # Examples
/// ```
/// use tagsieve::query::exclude_tag;
///
/// assert_eq!(exclude_tag("cat or dog hat", "dog"), "cat hat -dog");
/// ```
#[must_use]
pub fn exclude_tag(query: &str, tag: &str) -> String {
    append_token(query, &format!("-{tag}"), tag)
}

fn append_token(query: &str, token: &str, opposite: &str) -> String {
    let invalid = token.is_empty() || token == "-" || token.contains(char::is_whitespace);
    let present = query.split_whitespace().any(|existing| existing == token);
    if invalid || present {
        return normalize(query);
    }

    let mut base = remove_tag(query, opposite);
    if !base.is_empty() {
        base.push(' ');
    }
    base.push_str(token);
    base
}

fn normalize(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}
