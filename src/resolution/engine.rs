use std::path::Path;

use tracing::debug;

use crate::catalog;
use crate::db::Database;
use crate::errors::{Result, SwatNavError};
use crate::position::{column_name_at, find_token_at_position};
use crate::resolution::fallback::scan_file_for_record;
use crate::tokenizer::{find_header_line, parse_line_tokens, DEFAULT_HEADER_SCAN};
use crate::types::{ResolutionResult, ResolvedVia};

/// SWAT+ sentinel for "no reference"; a null token never resolves.
const NULL_SENTINEL: &str = "null";

/// One resolution request. The engine is stateless: every field is supplied
/// per call and nothing is cached between calls.
#[derive(Debug)]
pub struct ResolveRequest<'a> {
    /// Root directory of the dataset, owned by the caller.
    pub dataset_root: &'a Path,
    /// Base name of the file the cursor is in (e.g. `hru-data.hru`).
    pub file_name: &'a str,
    /// Full text of that file.
    pub text: &'a str,
    /// 0-based line index of the cursor.
    pub line: usize,
    /// 0-based character offset of the cursor within the line.
    pub column: usize,
    /// Optional read-only project database. `None` means fallback-only
    /// resolution.
    pub database: Option<&'a Database>,
    /// Number of leading lines scanned for the header.
    pub max_header_lines: usize,
}

impl<'a> ResolveRequest<'a> {
    pub fn new(
        dataset_root: &'a Path,
        file_name: &'a str,
        text: &'a str,
        line: usize,
        column: usize,
        database: Option<&'a Database>,
    ) -> Self {
        Self {
            dataset_root,
            file_name,
            text,
            line,
            column,
            database,
            max_header_lines: DEFAULT_HEADER_SCAN,
        }
    }
}

/// Resolves the relationship under a cursor position.
///
/// `Ok(None)` is the frequent, expected outcome: no header, cursor not on a
/// token, column not a foreign key, or no matching record anywhere. The only
/// error is an inaccessible dataset root; database trouble degrades silently
/// to the fallback path.
///
/// Resolution order:
/// 1. the foreign key declared in the database, when one is declared for the
///    column (database truth takes precedence over static guesses);
/// 2. a `name` lookup against the statically guessed table, when a database
///    is present but the declared key found no row;
/// 3. a first-column scan of the statically guessed file, when no database is
///    usable.
pub fn resolve(req: &ResolveRequest) -> Result<Option<ResolutionResult>> {
    if !req.dataset_root.is_dir() {
        return Err(SwatNavError::Dataset {
            message: "dataset root is not an accessible directory".to_string(),
            path: req.dataset_root.display().to_string(),
        });
    }

    let source_table = match catalog::table_for_file(req.file_name) {
        Some(t) => t,
        None => return Ok(None),
    };

    let lines: Vec<&str> = req.text.lines().collect();
    let header_idx = match find_header_line(&lines, req.max_header_lines) {
        Some(i) => i,
        None => return Ok(None),
    };
    if req.line <= header_idx || req.line >= lines.len() {
        return Ok(None);
    }

    let header = parse_line_tokens(lines[header_idx]);
    let tokens = parse_line_tokens(lines[req.line]);
    let token = match find_token_at_position(&tokens, req.column) {
        Some(t) => t,
        None => return Ok(None),
    };
    let column_name = match column_name_at(&header, token.index) {
        Some(c) => c.to_string(),
        None => return Ok(None),
    };
    let value = token.value.clone();
    if value == NULL_SENTINEL {
        return Ok(None);
    }

    // A usable database makes its declared foreign key set authoritative; a
    // database that fails mid-call degrades to the no-database path.
    let declared_columns = req.database.and_then(|db| {
        db.foreign_key_columns(source_table)
            .map_err(|e| debug!(table = source_table, error = %e, "foreign key listing failed"))
            .ok()
    });

    if let (Some(db), Some(fk_columns)) = (req.database, &declared_columns) {
        let suffixed = format!("{column_name}_id");
        let declared = fk_columns
            .iter()
            .any(|c| c == &column_name || c == &suffixed);
        if !declared {
            return Ok(None);
        }

        match db.resolve_foreign_key(source_table, &column_name, &value) {
            Ok(Some((decl, record))) => {
                return Ok(Some(ResolutionResult {
                    target: decl.target_table,
                    record,
                    source_column: column_name,
                    source_value: value,
                    line_index: None,
                    resolved_via: ResolvedVia::ForeignKey,
                }));
            }
            Ok(None) => {}
            Err(e) => debug!(error = %e, "foreign key resolution failed"),
        }

        // Declared key found no row: try the guessed table by name.
        if let Some(guessed_table) = catalog::guess_target_table(&column_name) {
            match db.find_record_by_name(guessed_table, &value) {
                Ok(Some(record)) => {
                    return Ok(Some(ResolutionResult {
                        target: guessed_table.to_string(),
                        record,
                        source_column: column_name,
                        source_value: value,
                        line_index: None,
                        resolved_via: ResolvedVia::NameLookup,
                    }));
                }
                Ok(None) => {}
                Err(e) => debug!(error = %e, "name lookup failed"),
            }
        }
        return Ok(None);
    }

    // No usable database: guess the target file and scan it.
    let guessed_file = match catalog::guess_target_file(&column_name) {
        Some(f) => f,
        None => return Ok(None),
    };
    let path = req.dataset_root.join(guessed_file);
    match scan_file_for_record(&path, &value) {
        Some(found) => Ok(Some(ResolutionResult {
            target: guessed_file.to_string(),
            record: found.record,
            source_column: column_name,
            source_value: value,
            line_index: Some(found.line_index),
            resolved_via: ResolvedVia::FileScan,
        })),
        None => Ok(None),
    }
}
