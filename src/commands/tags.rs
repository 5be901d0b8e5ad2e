//! Tags command - tag frequencies in a record file

use crate::catalog::{TagCatalog, TagUsage};
use crate::commands::OutputOptions;
use crate::records;
use crate::{TagsieveError, output};
use std::path::Path;

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute the tags command
///
/// # Errors
/// Returns an error if the record file cannot be loaded or JSON output fails.
pub fn execute(path: &Path, prefix: Option<&str>, options: OutputOptions) -> Result<()> {
    let records = records::load_records(path)?;
    let catalog = TagCatalog::from_records(&records);
    println!("{}", render(&catalog, prefix, options)?);
    Ok(())
}

fn render(catalog: &TagCatalog, prefix: Option<&str>, options: OutputOptions) -> Result<String> {
    let usages: Vec<&TagUsage> = catalog.with_prefix(prefix.unwrap_or_default()).collect();

    if options.is_json() {
        return Ok(output::json(&usages)?);
    }
    if usages.is_empty() {
        return Ok(if options.quiet {
            String::new()
        } else {
            "No tags found.".to_string()
        });
    }

    let mut lines = Vec::with_capacity(usages.len() + 1);
    if !options.quiet {
        lines.push("Tags:".to_string());
    }
    lines.extend(usages.iter().map(|usage| output::tag_with_count(usage, options.quiet)));
    Ok(lines.join("\n"))
}
