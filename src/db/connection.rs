use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::errors::{Result, SwatNavError};

/// Read-only handle to a SWAT+ project database.
///
/// Connections are opened for the duration of one resolution call and closed
/// when the handle is dropped; there is no pooling or caching.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens an existing database at `db_path` read-only.
    ///
    /// Fails if the file does not exist or is not a SQLite database. The
    /// engine treats an open failure as "no database available" and routes to
    /// fallback resolution.
    pub fn open_read_only(db_path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| SwatNavError::Database {
            message: format!("failed to open database '{}': {}", db_path.display(), e),
            operation: "open_read_only".to_string(),
        })?;

        conn.execute_batch("PRAGMA query_only = ON;")
            .map_err(|e| SwatNavError::Database {
                message: format!("failed to apply pragmas: {e}"),
                operation: "open_read_only".to_string(),
            })?;

        Ok(Self { conn })
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Consumes the `Database`, closing the underlying connection.
    pub fn close(self) {
        drop(self.conn);
    }
}
