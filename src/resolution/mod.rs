/// Relationship resolution.
///
/// `engine` orchestrates one resolution request from cursor position to a
/// normalized result; `fallback` performs the database-free file scan.
mod engine;
mod fallback;

pub use engine::{resolve, ResolveRequest};
pub use fallback::{find_record_line_in_file, scan_file_for_record};
