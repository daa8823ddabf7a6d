/// Read-only access to the optional SQLite project database.
///
/// The database is a capability: the resolution engine takes an
/// `Option<&Database>` and falls back to file scanning when it is absent or
/// unusable. All access is strictly read-only.
mod connection;
mod introspect;

pub use connection::Database;
pub use introspect::is_valid_identifier;
