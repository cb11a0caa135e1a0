//! Integration tests for JSON board snapshot loading.

use std::io::Write;

use refselect::board::{snapshot, BoardError};

fn write_snapshot(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create snapshot file");
    file.write_all(contents.as_bytes()).expect("write snapshot");
    path
}

#[test]
fn load_valid_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(
        &dir,
        "board.json",
        r#"{
            "footprints": [
                { "reference": "SW33" },
                { "reference": "SW50", "selected": false },
                { "reference": "R1" }
            ]
        }"#,
    );

    let board = snapshot::load(&path).unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board.footprints()[0].reference(), "SW33");
    assert!(board.selected_references().is_empty());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = snapshot::load(&path).unwrap_err();
    assert!(matches!(err, BoardError::FileRead { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, "broken.json", r#"{ "footprints": ["#);

    let err = snapshot::load(&path).unwrap_err();
    assert!(matches!(err, BoardError::ParseError { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn footprint_without_reference_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_snapshot(&dir, "bad.json", r#"{ "footprints": [ { "selected": true } ] }"#);

    assert!(matches!(
        snapshot::load(&path),
        Err(BoardError::ParseError { .. })
    ));
}
