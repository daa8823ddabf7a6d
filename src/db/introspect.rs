use rusqlite::types::ValueRef;
use rusqlite::{params, OptionalExtension};
use tracing::warn;

use super::connection::Database;
use crate::errors::{Result, SwatNavError};
use crate::types::{ForeignKeyDeclaration, Record};

/// Validates a table or column name before it is used to build a query.
///
/// Accepts a letter followed by letters, digits, or underscores. Anything
/// else is a hard stop for that query path: the name never reaches SQL.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Renders a SQLite value as the literal text used for comparison and display.
fn value_to_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "null".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(_) => "<blob>".to_string(),
    }
}

/// Maps a full row to a `Record`, preserving column order.
fn row_to_record(row: &rusqlite::Row, columns: &[String]) -> rusqlite::Result<Record> {
    let mut record = Record::new();
    for (i, name) in columns.iter().enumerate() {
        record.push(name.clone(), value_to_text(row.get_ref(i)?));
    }
    Ok(record)
}

impl Database {
    /// Lists the foreign keys declared on a table.
    ///
    /// Returns an empty vector when the table has no declarations, does not
    /// exist, or fails identifier validation. SQLite leaves the target column
    /// empty when a foreign key references the implicit primary key, in which
    /// case it defaults to `id` (the SWAT+ editor schema convention).
    pub fn foreign_key_declarations(&self, table: &str) -> Result<Vec<ForeignKeyDeclaration>> {
        if !is_valid_identifier(table) {
            warn!(table, "rejected invalid table identifier");
            return Ok(Vec::new());
        }

        let sql = format!("PRAGMA foreign_key_list('{table}')");
        let mut stmt = self
            .conn()
            .prepare(&sql)
            .map_err(|e| SwatNavError::Database {
                message: format!("failed to prepare foreign key listing: {e}"),
                operation: "foreign_key_declarations".to_string(),
            })?;

        let rows = stmt
            .query_map([], |row| {
                let target_column: Option<String> = row.get("to")?;
                Ok(ForeignKeyDeclaration {
                    source_column: row.get("from")?,
                    target_table: row.get("table")?,
                    target_column: target_column.unwrap_or_else(|| "id".to_string()),
                })
            })
            .map_err(|e| SwatNavError::Database {
                message: format!("failed to query foreign keys: {e}"),
                operation: "foreign_key_declarations".to_string(),
            })?;

        let mut decls = Vec::new();
        for row in rows {
            decls.push(row.map_err(|e| SwatNavError::Database {
                message: format!("failed to read foreign key row: {e}"),
                operation: "foreign_key_declarations".to_string(),
            })?);
        }
        Ok(decls)
    }

    /// Returns the set of source column names declared as foreign keys on a
    /// table. Empty for a missing table or one without declarations.
    pub fn foreign_key_columns(&self, table: &str) -> Result<Vec<String>> {
        Ok(self
            .foreign_key_declarations(table)?
            .into_iter()
            .map(|d| d.source_column)
            .collect())
    }

    /// Resolves a foreign key value to the referenced record.
    ///
    /// Looks up the declared foreign key for `source_column` on
    /// `source_table`, then queries the target table for the row whose target
    /// column equals `source_value`. The declaration may use either the bare
    /// column name or the `<column>_id` form the SWAT+ editor schema gives
    /// database foreign key columns.
    ///
    /// Returns `None` when there is no declaration or no matching row.
    pub fn resolve_foreign_key(
        &self,
        source_table: &str,
        source_column: &str,
        source_value: &str,
    ) -> Result<Option<(ForeignKeyDeclaration, Record)>> {
        if !is_valid_identifier(source_table) || !is_valid_identifier(source_column) {
            warn!(source_table, source_column, "rejected invalid identifier");
            return Ok(None);
        }

        let suffixed = format!("{source_column}_id");
        let decl = match self
            .foreign_key_declarations(source_table)?
            .into_iter()
            .find(|d| d.source_column == source_column || d.source_column == suffixed)
        {
            Some(d) => d,
            None => return Ok(None),
        };

        if !is_valid_identifier(&decl.target_table) || !is_valid_identifier(&decl.target_column) {
            warn!(
                target_table = %decl.target_table,
                target_column = %decl.target_column,
                "rejected invalid foreign key target identifier"
            );
            return Ok(None);
        }

        let record = self.select_one_where(
            &decl.target_table,
            &decl.target_column,
            source_value,
            "resolve_foreign_key",
        )?;
        Ok(record.map(|r| (decl, r)))
    }

    /// Looks up a record by its conventional `name` column.
    ///
    /// Used when no declared foreign key exists but a plausible name match is
    /// wanted against a guessed table.
    pub fn find_record_by_name(&self, table: &str, name: &str) -> Result<Option<Record>> {
        if !is_valid_identifier(table) {
            warn!(table, "rejected invalid table identifier");
            return Ok(None);
        }
        if !self.table_exists(table)? {
            return Ok(None);
        }
        self.select_one_where(table, "name", name, "find_record_by_name")
    }

    /// Returns whether a table exists in the database.
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        if !is_valid_identifier(table) {
            return Ok(false);
        }
        self.conn()
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |_| Ok(()),
            )
            .optional()
            .map(|found| found.is_some())
            .map_err(|e| SwatNavError::Database {
                message: format!("failed to check table existence: {e}"),
                operation: "table_exists".to_string(),
            })
    }

    /// Returns the names of all tables in the database, sorted.
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .map_err(|e| SwatNavError::Database {
                message: format!("failed to prepare table listing: {e}"),
                operation: "list_tables".to_string(),
            })?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| SwatNavError::Database {
                message: format!("failed to query tables: {e}"),
                operation: "list_tables".to_string(),
            })?;

        let mut tables = Vec::new();
        for row in rows {
            tables.push(row.map_err(|e| SwatNavError::Database {
                message: format!("failed to read table name: {e}"),
                operation: "list_tables".to_string(),
            })?);
        }
        Ok(tables)
    }

    /// Selects the first row of `table` where `column` equals `value`,
    /// returning the full row as a record.
    ///
    /// Both identifiers must already be validated by the caller; the value is
    /// always bound as a parameter.
    fn select_one_where(
        &self,
        table: &str,
        column: &str,
        value: &str,
        operation: &str,
    ) -> Result<Option<Record>> {
        let sql = format!("SELECT * FROM \"{table}\" WHERE \"{column}\" = ?1 LIMIT 1");
        let mut stmt = self
            .conn()
            .prepare(&sql)
            .map_err(|e| SwatNavError::Database {
                message: format!("failed to prepare row lookup: {e}"),
                operation: operation.to_string(),
            })?;

        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        stmt.query_row(params![value], |row| row_to_record(row, &columns))
            .optional()
            .map_err(|e| SwatNavError::Database {
                message: format!("failed to query record: {e}"),
                operation: operation.to_string(),
            })
    }
}
