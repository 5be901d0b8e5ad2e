//! Search command - filter a record file with a query

use crate::commands::OutputOptions;
use crate::query::{self, RecordFilterExt};
use crate::records::{self, MediaRecord};
use crate::{TagsieveError, output};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute the search command
///
/// # Errors
/// Returns an error if the record file cannot be loaded or JSON output fails.
pub fn execute(text: &str, path: &Path, options: OutputOptions) -> Result<()> {
    let records = records::load_records(path)?;
    println!("{}", render(text, &records, options)?);
    Ok(())
}

fn render(text: &str, records: &[MediaRecord], options: OutputOptions) -> Result<String> {
    let filter = query::parse(text);
    let hits: Vec<&MediaRecord> = records.apply_query(&filter).collect();
    tracing::debug!(total = records.len(), hits = hits.len(), "search finished");

    if options.is_json() {
        return Ok(output::json(&hits)?);
    }

    let ids = hits.iter().map(|record| record.id.as_str());
    if options.quiet {
        return Ok(ids.collect::<Vec<_>>().join("\n"));
    }
    if hits.is_empty() {
        return Ok("No matching records.".to_string());
    }

    let mut lines = vec![format!("Found {} matching record(s):", hits.len())];
    lines.extend(hits.iter().map(|record| {
        format!("  {} [{}]", record.id.bold(), record.tags.join(", "))
    }));
    Ok(lines.join("\n"))
}
