use crate::types::Token;

/// Comment marker for dataset files: lines whose trimmed content starts with
/// this are skipped when locating the header.
pub const COMMENT_MARKER: char = '#';

/// Default number of leading lines scanned when locating the header.
pub const DEFAULT_HEADER_SCAN: usize = 5;

/// Splits a line into whitespace-delimited tokens with exact character offsets.
///
/// Tokens are runs of non-whitespace characters; any space or tab separates
/// them. Offsets are half-open (`start..end`) character positions into the
/// line. An empty or all-whitespace line yields an empty vector. There is no
/// quoting or escaping in the dataset format.
pub fn parse_line_tokens(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut current = String::new();

    for (pos, ch) in line.chars().enumerate() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    value: std::mem::take(&mut current),
                    start: s,
                    end: pos,
                    index: tokens.len(),
                });
            }
        } else {
            if start.is_none() {
                start = Some(pos);
            }
            current.push(ch);
        }
    }

    if let Some(s) = start {
        let end = s + current.chars().count();
        tokens.push(Token {
            value: current,
            start: s,
            end,
            index: tokens.len(),
        });
    }

    tokens
}

/// Locates the header line of a dataset file.
///
/// Scans at most the first `max_lines_to_check` lines, skipping lines that
/// are empty after trimming or whose trimmed content starts with `#`, and
/// returns the index of the first qualifying line. `None` means no header is
/// present in the scan window; callers treat that as "no resolution possible
/// here", not as a fault.
pub fn find_header_line(lines: &[&str], max_lines_to_check: usize) -> Option<usize> {
    for (idx, line) in lines.iter().take(max_lines_to_check).enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }
        return Some(idx);
    }
    None
}
