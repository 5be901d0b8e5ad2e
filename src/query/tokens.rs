//! Tag token parsing
//!
//! Splits the residual query text (metatags already removed) on whitespace
//! and sorts each token into one of three buckets:
//!
//! - `tag`: required (include)
//! - `-tag`: forbidden (exclude); a bare `-` is dropped
//! - `a or b`: alternatives, collected into OR-groups
//!
//! `or` is matched case-insensitively and binds the token before it with the
//! token after it. Chains (`a or b or c`) fold into a single group.

/// Result of tokenizing residual query text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTokens {
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    pub or_groups: Vec<Vec<String>>,
}

/// Where the previous token ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Tentatively required; still the last entry of `include_tags`
    Included,
    Excluded,
    Grouped,
    Dropped,
}

/// Keyword check shared with the mutator
#[must_use]
pub fn is_or_keyword(token: &str) -> bool {
    token.eq_ignore_ascii_case("or")
}

/// Tokenize residual text into include, exclude and OR-group buckets
///
/// # Examples
/// ```
/// use tagsieve::query::parse_tokens;
///
/// let tokens = parse_tokens("anime long_hair or short_hair -realistic");
/// assert_eq!(tokens.include_tags, vec!["anime"]);
/// assert_eq!(tokens.or_groups, vec![vec!["long_hair", "short_hair"]]);
/// assert_eq!(tokens.exclude_tags, vec!["realistic"]);
/// ```
#[must_use]
pub fn parse_tokens(text: &str) -> TagTokens {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut parsed = TagTokens::default();
    let mut previous = Slot::Dropped;
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];

        if is_or_keyword(token) && i > 0 && i + 1 < tokens.len() {
            bind_or(&mut parsed, previous, tokens[i - 1], tokens[i + 1]);
            previous = Slot::Grouped;
            i += 2;
            continue;
        }

        previous = match token.strip_prefix('-') {
            Some("") => Slot::Dropped,
            Some(excluded) => {
                parsed.exclude_tags.push(excluded.to_string());
                Slot::Excluded
            }
            None => {
                parsed.include_tags.push(token.to_string());
                Slot::Included
            }
        };
        i += 1;
    }

    parsed
}

/// Join `prev` and `next` into an OR-group
///
/// A tentatively included `prev` is withdrawn first. If `prev` already sits
/// in a group, `next` extends that group instead of starting a new one.
fn bind_or(parsed: &mut TagTokens, previous: Slot, prev: &str, next: &str) {
    if previous == Slot::Included {
        parsed.include_tags.pop();
    }

    if let Some(group) = parsed
        .or_groups
        .iter_mut()
        .find(|group| group.iter().any(|tag| tag == prev))
    {
        tracing::trace!(prev, next, "extending or-group");
        group.push(next.to_string());
    } else {
        tracing::trace!(prev, next, "new or-group");
        parsed.or_groups.push(vec![prev.to_string(), next.to_string()]);
    }
}
