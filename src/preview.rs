use std::path::{Path, PathBuf};

use crate::catalog;
use crate::types::{ResolutionResult, ResolvedVia};

/// Formats a resolution result as a Markdown hover preview.
///
/// The heading uses the human-friendly column label when one is known, and
/// the record's fields are rendered as a two-column table.
pub fn format_result_as_markdown(result: &ResolutionResult) -> String {
    let mut out = String::new();

    let heading = catalog::column_label(&result.source_column)
        .unwrap_or(result.source_column.as_str());
    out.push_str(&format!("### {}: {}\n", heading, result.source_value));
    out.push_str(&format!("_{}_", result.target));
    if let Some(line) = result.line_index {
        out.push_str(&format!(" (line {})", line + 1));
    }
    out.push_str("\n\n");

    if result.record.is_empty() {
        out.push_str("_No fields available._\n");
        return out;
    }

    out.push_str("| Field | Value |\n");
    out.push_str("| --- | --- |\n");
    for (name, value) in result.record.iter() {
        out.push_str(&format!("| {} | {} |\n", name, value));
    }

    out
}

/// Formats a resolution result as pretty-printed JSON.
pub fn format_result_as_json(result: &ResolutionResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

/// Derives a navigable location from a resolution result.
///
/// File-scan results carry their line directly. Database results navigate to
/// the start of the mirrored dataset file when the target table maps back to
/// one; a database-only target yields `None`.
pub fn navigation_target(result: &ResolutionResult, dataset_root: &Path) -> Option<(PathBuf, usize)> {
    match result.resolved_via {
        ResolvedVia::FileScan => {
            Some((dataset_root.join(&result.target), result.line_index?))
        }
        ResolvedVia::ForeignKey | ResolvedVia::NameLookup => {
            let file = catalog::file_for_table(&result.target)?;
            Some((dataset_root.join(file), 0))
        }
    }
}
