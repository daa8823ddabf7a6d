use std::path::PathBuf;

use swatnav::db::{is_valid_identifier, Database};
use tempfile::TempDir;

/// Creates a fixture project database mirroring the SWAT+ editor schema
/// shape: a source table whose foreign key column references the target
/// table's `name` column.
fn fixture_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("project.sqlite");
    let conn = rusqlite::Connection::open(&path).expect("failed to create fixture db");
    conn.execute_batch(
        "CREATE TABLE hydrology_hyd (name TEXT PRIMARY KEY, param1 REAL);
         CREATE TABLE snow_sno (name TEXT PRIMARY KEY, fall_tmp REAL);
         CREATE TABLE hru_data_hru (
             name TEXT,
             hydro TEXT REFERENCES hydrology_hyd(name),
             snow_id TEXT REFERENCES snow_sno(name)
         );
         CREATE TABLE topography_hyd (name TEXT, slp REAL);
         INSERT INTO hydrology_hyd VALUES ('hydro_001', 5.2);
         INSERT INTO hydrology_hyd VALUES ('hydro_002', 0.05);
         INSERT INTO snow_sno VALUES ('snow1', -1.5);
         INSERT INTO hru_data_hru VALUES ('hru_001', 'hydro_001', 'snow1');",
    )
    .expect("failed to populate fixture db");
    path
}

#[test]
fn open_read_only_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.sqlite");
    assert!(Database::open_read_only(&missing).is_err());
}

#[test]
fn list_tables_and_existence() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    let tables = db.list_tables().unwrap();
    assert!(tables.contains(&"hydrology_hyd".to_string()));
    assert!(tables.contains(&"hru_data_hru".to_string()));

    assert!(db.table_exists("hydrology_hyd").unwrap());
    assert!(!db.table_exists("no_such_table").unwrap());
}

#[test]
fn foreign_key_columns_lists_declared_keys() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    let cols = db.foreign_key_columns("hru_data_hru").unwrap();
    assert!(cols.contains(&"hydro".to_string()));
    assert!(cols.contains(&"snow_id".to_string()));
    assert!(!cols.contains(&"name".to_string()));
}

#[test]
fn foreign_key_columns_empty_for_plain_or_missing_table() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    assert!(db.foreign_key_columns("topography_hyd").unwrap().is_empty());
    assert!(db.foreign_key_columns("no_such_table").unwrap().is_empty());
}

#[test]
fn resolve_foreign_key_returns_target_row() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    let (decl, record) = db
        .resolve_foreign_key("hru_data_hru", "hydro", "hydro_001")
        .unwrap()
        .expect("declared key with matching row must resolve");

    assert_eq!(decl.target_table, "hydrology_hyd");
    assert_eq!(decl.target_column, "name");
    assert_eq!(record.get("name"), Some("hydro_001"));
    assert_eq!(record.get("param1"), Some("5.2"));
}

#[test]
fn resolve_foreign_key_matches_id_suffixed_declaration() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    // The file column is `snow`; the database declares `snow_id`.
    let (decl, record) = db
        .resolve_foreign_key("hru_data_hru", "snow", "snow1")
        .unwrap()
        .expect("_id suffixed declaration must match the bare column name");

    assert_eq!(decl.source_column, "snow_id");
    assert_eq!(record.get("name"), Some("snow1"));
}

#[test]
fn resolve_foreign_key_no_declaration_or_row_is_none() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    // `name` is not a declared foreign key.
    assert!(db
        .resolve_foreign_key("hru_data_hru", "name", "hru_001")
        .unwrap()
        .is_none());
    // Declared key, no matching row.
    assert!(db
        .resolve_foreign_key("hru_data_hru", "hydro", "hydro_999")
        .unwrap()
        .is_none());
}

#[test]
fn find_record_by_name() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    let record = db
        .find_record_by_name("hydrology_hyd", "hydro_002")
        .unwrap()
        .expect("name lookup must find the row");
    assert_eq!(record.get("param1"), Some("0.05"));

    assert!(db
        .find_record_by_name("hydrology_hyd", "hydro_999")
        .unwrap()
        .is_none());
    assert!(db
        .find_record_by_name("no_such_table", "hydro_001")
        .unwrap()
        .is_none());
}

#[test]
fn name_matching_is_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    assert!(db
        .find_record_by_name("hydrology_hyd", "HYDRO_001")
        .unwrap()
        .is_none());
}

#[test]
fn identifier_validation() {
    assert!(is_valid_identifier("hydrology_hyd"));
    assert!(is_valid_identifier("a"));
    assert!(is_valid_identifier("A1_b2"));

    assert!(!is_valid_identifier(""));
    assert!(!is_valid_identifier("1abc"));
    assert!(!is_valid_identifier("a;DROP TABLE x"));
    assert!(!is_valid_identifier("a-b"));
    assert!(!is_valid_identifier("_leading"));
    assert!(!is_valid_identifier("with space"));
    assert!(!is_valid_identifier("quote'name"));
}

#[test]
fn invalid_identifiers_short_circuit_without_reaching_sql() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    // All of these would be injection attempts if the raw input reached a
    // query string; they must come back empty/none, not as SQL errors.
    assert!(db
        .foreign_key_columns("hru_data_hru'); DROP TABLE hydrology_hyd; --")
        .unwrap()
        .is_empty());
    assert!(db
        .resolve_foreign_key("a;DROP TABLE x", "hydro", "hydro_001")
        .unwrap()
        .is_none());
    assert!(db
        .resolve_foreign_key("hru_data_hru", "1abc", "hydro_001")
        .unwrap()
        .is_none());
    assert!(db.find_record_by_name("", "hydro_001").unwrap().is_none());
    assert!(!db.table_exists("a;DROP TABLE x").unwrap());

    // The store is untouched.
    assert!(db.table_exists("hydrology_hyd").unwrap());
}

#[test]
fn values_are_bound_not_spliced() {
    let dir = TempDir::new().unwrap();
    let db = Database::open_read_only(&fixture_db(&dir)).unwrap();

    // A hostile value is a legal parameter; it simply matches nothing.
    assert!(db
        .find_record_by_name("hydrology_hyd", "x' OR '1'='1")
        .unwrap()
        .is_none());
}
