//! Folder-operation tests against a real filesystem.

use disk_core::{create_folder, delete_folder, is_real_file_path, is_real_folder_path};
use std::fs;
use tempfile::TempDir;

fn scratch() -> TempDir {
    TempDir::new().expect("create scratch dir")
}

#[test]
fn folder_predicate_is_false_for_empty_path() {
    assert!(!is_real_folder_path(""));
}

#[test]
fn folder_predicate_is_false_for_missing_path() {
    let root = scratch();
    assert!(!is_real_folder_path(root.path().join("alfa")));
}

#[test]
fn folder_predicate_is_false_for_file() {
    let root = scratch();
    let file = root.path().join("alfa.txt");
    fs::write(&file, "").unwrap();
    assert!(!is_real_folder_path(&file));
}

#[test]
fn folder_predicate_is_true_for_directory() {
    let root = scratch();
    assert!(is_real_folder_path(root.path()));
}

#[test]
fn file_predicate_is_false_for_empty_path() {
    assert!(!is_real_file_path(""));
}

#[test]
fn file_predicate_is_false_for_missing_path() {
    let root = scratch();
    assert!(!is_real_file_path(root.path().join("alpha.txt")));
}

#[test]
fn file_predicate_is_false_for_directory() {
    let root = scratch();
    assert!(!is_real_file_path(root.path()));
}

#[test]
fn file_predicate_is_true_for_file() {
    let root = scratch();
    let file = root.path().join("alpha.txt");
    fs::write(&file, "").unwrap();
    assert!(is_real_file_path(&file));
}

#[test]
fn create_folder_returns_input_path() {
    let root = scratch();
    let target = root.path().join("alfa");
    assert_eq!(create_folder(&target).unwrap(), target);
}

#[test]
fn create_folder_creates_missing_parents() {
    let root = scratch();
    let target = root.path().join("alfa").join("bravo");
    assert!(!target.exists());
    create_folder(&target).unwrap();
    assert!(target.is_dir());
}

#[test]
fn create_folder_leaves_existing_contents_alone() {
    let root = scratch();
    let target = root.path().join("alpha");
    create_folder(&target).unwrap();

    let file = target.join("bravo.txt");
    fs::write(&file, "").unwrap();

    create_folder(&target).unwrap();
    assert!(file.exists());
}

#[test]
fn delete_folder_returns_zero_for_missing_path() {
    let root = scratch();
    assert_eq!(delete_folder(root.path().join("alpha")).unwrap(), 0);
}

#[test]
fn delete_folder_returns_zero_for_file() {
    let root = scratch();
    let file = root.path().join("alpha.txt");
    fs::write(&file, "").unwrap();
    assert_eq!(delete_folder(&file).unwrap(), 0);
    assert!(file.exists());
}

#[test]
fn delete_folder_removes_populated_tree() {
    let root = scratch();
    let dir = root.path().join("alpha");
    create_folder(&dir).unwrap();
    fs::write(dir.join("alpha.txt"), "").unwrap();

    assert_eq!(delete_folder(&dir).unwrap(), 1);
    assert!(!dir.exists());
}
