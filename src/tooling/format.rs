//! Text rendering for CLI output.

use crate::listing::{ListingOutcome, EMPTY_PLACEHOLDER};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Listing as a heading plus a two-column table.
pub fn format_listing_text(directory: &Path, outcome: &ListingOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Notes in {}", directory.display()))
    ));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Kind", "Path"]);
    match outcome {
        ListingOutcome::Entries(entries) => {
            for entry in entries {
                let kind = if entry.is_folder() { "folder" } else { "note" };
                table.add_row(vec![kind.to_string(), entry.to_string()]);
            }
        }
        ListingOutcome::Empty => {
            table.add_row(vec!["empty".to_string(), EMPTY_PLACEHOLDER.to_string()]);
        }
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Listing as JSON: `{"directory", "empty", "entries"}`.
pub fn format_listing_json(directory: &Path, outcome: &ListingOutcome) -> String {
    let value = serde_json::json!({
        "directory": directory.to_string_lossy(),
        "empty": outcome.is_empty(),
        "entries": outcome.display_entries(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
