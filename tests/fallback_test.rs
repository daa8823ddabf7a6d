use swatnav::resolution::{find_record_line_in_file, scan_file_for_record};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write fixture file");
    path
}

#[test]
fn scan_finds_first_column_match() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "hydrology.hyd",
        "name param1\nhydro_001 5.2\nhydro_002 0.05\n",
    );

    let found = scan_file_for_record(&path, "hydro_002").expect("match expected");
    assert_eq!(found.line_index, 2);
    assert_eq!(found.record.get("name"), Some("hydro_002"));
    assert_eq!(found.record.get("param1"), Some("0.05"));
}

#[test]
fn scan_skips_comment_and_blank_lines_before_header() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "hydrology.hyd",
        "# hydrology.hyd: written by editor\n\nname param1\nhydro_001 5.2\n",
    );

    let found = scan_file_for_record(&path, "hydro_001").expect("match expected");
    assert_eq!(found.line_index, 3);
}

#[test]
fn scan_does_not_match_the_header_line() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "hydrology.hyd", "name param1\nname 1.0\n");

    // A data row whose first token is literally "name" matches; the header
    // itself is never a candidate.
    let found = scan_file_for_record(&path, "name").expect("match expected");
    assert_eq!(found.line_index, 1);
}

#[test]
fn scan_first_match_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "topography.hyd",
        "name slp\ntopo_001 0.1\ntopo_001 0.9\n",
    );

    let found = scan_file_for_record(&path, "topo_001").expect("match expected");
    assert_eq!(found.line_index, 1);
    assert_eq!(found.record.get("slp"), Some("0.1"));
}

#[test]
fn scan_is_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "hydrology.hyd", "name param1\nhydro_001 5.2\n");

    assert!(scan_file_for_record(&path, "HYDRO_001").is_none());
}

#[test]
fn scan_ragged_row_truncates_record_to_shared_prefix() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "hydrology.hyd",
        "name param1 param2\nhydro_001 5.2\n",
    );

    let found = scan_file_for_record(&path, "hydro_001").expect("match expected");
    assert_eq!(found.record.len(), 2);
    assert_eq!(found.record.get("param2"), None);
}

#[test]
fn scan_missing_file_or_header_is_none() {
    let dir = TempDir::new().unwrap();

    assert!(scan_file_for_record(&dir.path().join("absent.hyd"), "x").is_none());

    let no_header = write_file(&dir, "empty.hyd", "# only a comment\n\n");
    assert!(scan_file_for_record(&no_header, "x").is_none());

    let empty = write_file(&dir, "zero.hyd", "");
    assert!(scan_file_for_record(&empty, "x").is_none());
}

#[test]
fn find_record_line_in_file_returns_line_only() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "field.fld", "name len wd ang\nfld1 10 5 0\n");

    assert_eq!(find_record_line_in_file(&path, "fld1"), Some(1));
    assert_eq!(find_record_line_in_file(&path, "fld2"), None);
}
