use thiserror::Error;

/// Errors that can occur during resolution operations.
///
/// "Not found" conditions (missing header, cursor in whitespace, no matching
/// record) are never errors; they are `None`/empty returns throughout the
/// crate. Errors are reserved for genuinely broken inputs or collaborators.
#[derive(Error, Debug)]
pub enum SwatNavError {
    #[error("dataset error: {message} (path: {path})")]
    Dataset { message: String, path: String },

    #[error("database error: {message} (operation: {operation})")]
    Database { message: String, operation: String },

    #[error("invalid identifier: '{name}'")]
    InvalidIdentifier { name: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `SwatNavError`.
pub type Result<T> = std::result::Result<T, SwatNavError>;
