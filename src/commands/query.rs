//! Query commands - inspect and rewrite query text without any records

use crate::commands::OutputOptions;
use crate::query::{self, CmpOp, TagCount};
use crate::{TagsieveError, output};
use serde_json::json;

type Result<T> = std::result::Result<T, TagsieveError>;

/// Print the structured filter for `text`
///
/// # Errors
/// Returns an error if JSON output cannot be produced.
pub fn parse(text: &str, options: OutputOptions) -> Result<()> {
    println!("{}", render_parse(text, options)?);
    Ok(())
}

/// Print `text` with every occurrence of `tag` removed
///
/// # Errors
/// Returns an error if JSON output cannot be produced.
pub fn remove_tag(text: &str, tag: &str, options: OutputOptions) -> Result<()> {
    println!("{}", render_query(&query::remove_tag(text, tag), options)?);
    Ok(())
}

/// Print `text` with `tag` (or `-tag`) appended
///
/// # Errors
/// Returns an error if JSON output cannot be produced.
pub fn add_tag(text: &str, tag: &str, exclude: bool, options: OutputOptions) -> Result<()> {
    let rewritten = if exclude {
        query::exclude_tag(text, tag)
    } else {
        query::add_tag(text, tag)
    };
    println!("{}", render_query(&rewritten, options)?);
    Ok(())
}

/// Print the parsed form of a `tagcount:` value
///
/// # Errors
/// Returns `TagsieveError::InvalidInput` if the value is not a valid tag count.
pub fn tag_count(value: &str, options: OutputOptions) -> Result<()> {
    println!("{}", render_tag_count(value, options)?);
    Ok(())
}

fn render_parse(text: &str, options: OutputOptions) -> Result<String> {
    let filter = query::parse(text);
    if options.is_json() {
        Ok(output::json(&filter)?)
    } else {
        Ok(output::filter(&filter, options.quiet))
    }
}

fn render_query(text: &str, options: OutputOptions) -> Result<String> {
    if options.is_json() {
        Ok(output::json(&json!({ "query": text }))?)
    } else {
        Ok(text.to_string())
    }
}

fn render_tag_count(value: &str, options: OutputOptions) -> Result<String> {
    let tag_count: TagCount = query::parse_tag_count(value)
        .ok_or_else(|| TagsieveError::InvalidInput(format!("'{value}' is not a valid tag count")))?;

    if options.is_json() {
        Ok(output::json(&tag_count)?)
    } else if options.quiet {
        Ok(tag_count.to_string())
    } else {
        Ok(format!("{tag_count}  ({})", describe(&tag_count)))
    }
}

fn describe(tag_count: &TagCount) -> String {
    match tag_count {
        TagCount::Exact { value } => format!("exactly {value} tags"),
        TagCount::Cmp { op, value } => match op {
            CmpOp::Greater => format!("more than {value} tags"),
            CmpOp::Less => format!("fewer than {value} tags"),
            CmpOp::GreaterOrEqual => format!("at least {value} tags"),
            CmpOp::LessOrEqual => format!("at most {value} tags"),
        },
        TagCount::Range { min, max } => format!("{min} to {max} tags"),
        TagCount::List { values } => {
            let values: Vec<String> = values.iter().map(ToString::to_string).collect();
            format!("any of {} tags", values.join(", "))
        }
    }
}
