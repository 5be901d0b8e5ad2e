//! Suggest command - completions for a partly typed query

use crate::catalog::TagCatalog;
use crate::commands::OutputOptions;
use crate::completions::{self, Candidate};
use crate::records;
use crate::{TagsieveError, output};
use std::path::Path;

type Result<T> = std::result::Result<T, TagsieveError>;

/// Execute the suggest command
///
/// Without a record file only metatag completions are offered.
///
/// # Errors
/// Returns an error if a given record file cannot be loaded or JSON output fails.
pub fn execute(text: &str, path: Option<&Path>, limit: usize, options: OutputOptions) -> Result<()> {
    let catalog = match path {
        Some(path) => TagCatalog::from_records(&records::load_records(path)?),
        None => TagCatalog::default(),
    };
    let candidates = completions::suggest(text, &catalog, limit);
    println!("{}", render(&candidates, options)?);
    Ok(())
}

fn render(candidates: &[Candidate], options: OutputOptions) -> Result<String> {
    if options.is_json() {
        return Ok(output::json(candidates)?);
    }
    Ok(candidates
        .iter()
        .map(|candidate| output::candidate(candidate, options.quiet))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::testing::sample_records;

    #[test]
    fn test_render_quiet() {
        let catalog = TagCatalog::from_records(&sample_records());
        let candidates = completions::suggest("girl -ca", &catalog, 10);
        let options = OutputOptions {
            quiet: true,
            format: OutputFormat::Plain,
        };
        assert_eq!(render(&candidates, options).unwrap(), "-cat\n-car");
    }

    #[test]
    fn test_render_json_without_catalog() {
        let candidates = completions::suggest("is:s", &TagCatalog::default(), 10);
        let options = OutputOptions {
            quiet: false,
            format: OutputFormat::Json,
        };
        let text = render(&candidates, options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!([{ "value": "is:svg" }]));
    }
}
