//! Output formatting for CLI display
//!
//! Plain output is colored for terminals; `--quiet` strips it down to the
//! bare values so results can be piped. JSON output goes through serde.

use crate::catalog::TagUsage;
use crate::completions::Candidate;
use crate::query::StructuredFilter;
use colored::Colorize;
use serde::Serialize;

/// Serialize a value as pretty JSON
///
/// # Errors
/// Returns `serde_json::Error` if the value cannot be serialized.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Describe a parsed filter, one labelled line per populated part
///
/// In quiet mode only the canonical query text is returned.
#[must_use]
pub fn filter(filter: &StructuredFilter, quiet: bool) -> String {
    if quiet {
        return filter.to_string();
    }
    if filter.is_empty() {
        return format!("  {}", "(empty query, matches everything)".dimmed());
    }

    let mut lines = vec![field("query", &filter.to_string())];

    if !filter.include_tags.is_empty() {
        lines.push(field("require", &filter.include_tags.join(", ")));
    }
    for group in &filter.or_groups {
        lines.push(field("any of", &group.join(" | ")));
    }
    if !filter.exclude_tags.is_empty() {
        lines.push(field("exclude", &filter.exclude_tags.join(", ").red().to_string()));
    }
    if !filter.ratings.is_empty() || filter.include_unrated {
        let mut ratings: Vec<String> = filter.ratings.iter().map(char::to_string).collect();
        if filter.include_unrated {
            ratings.push("unrated".to_string());
        }
        lines.push(field("rating", &ratings.join(", ")));
    }
    if !filter.file_types.is_empty() {
        let types: Vec<&str> = filter.file_types.iter().map(String::as_str).collect();
        lines.push(field("type", &types.join(", ")));
    }
    if let Some(tag_count) = &filter.tag_count {
        lines.push(field("tagcount", &tag_count.to_string()));
    }
    if !filter.accounts.is_empty() {
        let accounts: Vec<&str> = filter.accounts.iter().map(String::as_str).collect();
        lines.push(field("account", &accounts.join(", ")));
    }
    if !filter.exclude_accounts.is_empty() {
        let accounts: Vec<&str> = filter.exclude_accounts.iter().map(String::as_str).collect();
        lines.push(field("hide", &accounts.join(", ").red().to_string()));
    }

    lines.join("\n")
}

fn field(label: &str, value: &str) -> String {
    let label = format!("{:<9}", format!("{label}:"));
    format!("  {} {value}", label.bold())
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(usage: &TagUsage, quiet: bool) -> String {
    if quiet {
        usage.tag.clone()
    } else {
        format!("  {} (used by {} record(s))", usage.tag.cyan(), usage.count)
    }
}

/// Format a completion candidate
#[must_use]
pub fn candidate(candidate: &Candidate, quiet: bool) -> String {
    match (&candidate.help, quiet) {
        (Some(help), false) => format!("  {}  {}", candidate.value.green(), help.dimmed()),
        (None, false) => format!("  {}", candidate.value.green()),
        (_, true) => candidate.value.clone(),
    }
}

/// Format an error message for stderr
#[must_use]
pub fn error(message: &str) -> String {
    format!("{} {message}", "Error:".red().bold())
}
