use std::fs;

use memsieve::{canonicalize_or_current, discover_snapshots};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");

    let resolved = canonicalize_or_current(&subdir.to_string_lossy()).expect("canonicalize");
    assert_eq!(resolved, subdir.canonicalize().expect("canonicalize subdir"));
}

#[test]
fn canonicalize_or_current_joins_missing_path_with_cwd() {
    let resolved = canonicalize_or_current("definitely-missing-dir").expect("canonicalize");
    assert!(resolved.is_absolute());
    assert!(resolved.ends_with("definitely-missing-dir"));
}

#[test]
fn discover_snapshots_picks_qualifying_files_sorted() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("b.heapsnapshot"), "{}").expect("write");
    fs::write(tmp.path().join("a.heapsnapshot"), "{}").expect("write");
    fs::write(tmp.path().join("Heap-20250801T120000.heapsnapshot.json"), "{}").expect("write");
    fs::write(tmp.path().join("notes.txt"), "irrelevant").expect("write");
    fs::create_dir(tmp.path().join("ignored.heapsnapshot.d")).expect("mkdir");

    let found = discover_snapshots(tmp.path()).expect("discover");
    let names: Vec<String> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    // Name containment, not extension equality: suffixed exports qualify too.
    assert_eq!(
        names,
        vec!["Heap-20250801T120000.heapsnapshot.json", "a.heapsnapshot", "b.heapsnapshot"]
    );
}

#[test]
fn discover_snapshots_returns_empty_for_no_matches() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("report.txt"), "nothing to see").expect("write");

    let found = discover_snapshots(tmp.path()).expect("discover");
    assert!(found.is_empty());
}

#[test]
fn discover_snapshots_errors_for_missing_dir() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("gone");

    let err = discover_snapshots(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read input dir"), "unexpected error: {err}");
}
