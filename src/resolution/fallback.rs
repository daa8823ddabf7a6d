use std::fs;
use std::path::Path;

use tracing::debug;

use crate::tokenizer::{find_header_line, parse_line_tokens, DEFAULT_HEADER_SCAN};
use crate::types::{FileMatch, Record};

/// Scans a dataset file for the record named `name`.
///
/// Skips to the header line, then linearly walks the data lines and returns
/// the first whose first token equals `name` exactly (case-sensitive). The
/// returned record pairs header columns with the matched line's tokens,
/// truncated to the shorter of the two.
///
/// A missing file, unreadable file, missing header, or no match all yield
/// `None`; none of these are errors on this path.
pub fn scan_file_for_record(path: &Path, name: &str) -> Option<FileMatch> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "fallback file not readable");
            return None;
        }
    };

    let lines: Vec<&str> = text.lines().collect();
    let header_idx = find_header_line(&lines, DEFAULT_HEADER_SCAN)?;
    let header = parse_line_tokens(lines[header_idx]);

    for (offset, line) in lines[header_idx + 1..].iter().enumerate() {
        let tokens = parse_line_tokens(line);
        let first = match tokens.first() {
            Some(t) => t,
            None => continue,
        };
        if first.value == name {
            let record: Record = header
                .iter()
                .zip(tokens.iter())
                .map(|(h, t)| (h.value.clone(), t.value.clone()))
                .collect();
            return Some(FileMatch {
                line_index: header_idx + 1 + offset,
                record,
            });
        }
    }

    None
}

/// Returns only the line index of the record named `name` in a dataset file.
pub fn find_record_line_in_file(path: &Path, name: &str) -> Option<usize> {
    scan_file_for_record(path, name).map(|m| m.line_index)
}
