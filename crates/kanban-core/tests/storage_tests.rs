// Rust guideline compliant 2026-10-16

//! Unit tests for the storage backends and the state store.
//!
//! These tests validate specific examples, edge cases, and error conditions.

use kanban_core::{
    BoardState, ColumnId, Error, FileStore, KeyValueStore, LoadError, StateStore, STORAGE_KEY,
};
use std::fs;
use tempfile::TempDir;

/// Helper to create a board with one card per column.
fn create_test_board() -> BoardState {
    let mut board = BoardState::default();
    board.add_card(ColumnId::Todo, "Plan".into(), "hsl(10deg 80% 90%)".into(), 1000);
    board.add_card(ColumnId::Doing, "Build".into(), "hsl(20deg 80% 90%)".into(), 2000);
    board.add_card(ColumnId::Done, "Ship".into(), "hsl(30deg 80% 90%)".into(), 3000);
    board
}

#[test]
fn test_missing_file_reads_none() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    assert_eq!(store.get(STORAGE_KEY).expect("get"), None);
}

#[test]
fn test_set_get_overwrite() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    store.set("board", "first").expect("set");
    store.set("board", "second").expect("set");
    assert_eq!(store.get("board").expect("get").as_deref(), Some("second"));

    let path = temp_dir.path().join("board.json");
    assert_eq!(fs::read_to_string(path).expect("read"), "second");
}

#[test]
fn test_set_leaves_no_temp_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    store.set(STORAGE_KEY, "{}").expect("set");

    let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp file should be renamed away");
}

#[test]
fn test_remove_missing_key_is_ok() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    store.remove("nothing-here").expect("remove");
    store.set("k", "v").expect("set");
    store.remove("k").expect("remove");
    assert_eq!(store.get("k").expect("get"), None);
}

#[test]
fn test_invalid_keys_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");

    for key in ["", "../escape", "a/b", ".hidden"] {
        assert!(
            matches!(store.set(key, "v"), Err(Error::InvalidKey(_))),
            "key {key:?} should be rejected"
        );
    }
}

#[test]
fn test_empty_path_rejected() {
    assert!(FileStore::new(std::path::PathBuf::new()).is_err());
}

#[test]
fn test_write_into_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::new(temp_dir.path().join("absent")).expect("Failed to create store");

    assert!(store.set(STORAGE_KEY, "{}").is_err());
}

#[test]
fn test_state_round_trip_through_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let backend = FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store");
    let store = StateStore::new(backend);

    let board = create_test_board();
    store.save(&board).expect("save");

    let reopened = StateStore::new(
        FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store"),
    );
    assert_eq!(reopened.load().expect("load"), board);
}

#[test]
fn test_corrupted_file_recovers_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join(format!("{STORAGE_KEY}.json")), "}{ definitely not json")
        .expect("Failed to write test file");

    let store = StateStore::new(
        FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store"),
    );
    assert!(matches!(store.try_load(), Err(LoadError::Malformed(_))));

    let board = store.load().expect("load");
    assert_eq!(board.next_id, 1);
    assert!(board.columns.todo.is_empty());
    assert!(board.columns.doing.is_empty());
    assert!(board.columns.done.is_empty());
}

#[test]
fn test_reads_browser_payload() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let payload = r#"{"nextId":4,"columns":{"todo":[{"id":3,"title":"Nowa karta","color":"hsl(200deg 80% 90%)","createdAt":1718000000000}],"doing":[],"done":[{"id":1,"title":"Zakupy","color":"hsl(15deg 80% 90%)","createdAt":1717000000000}]}}"#;
    fs::write(temp_dir.path().join(format!("{STORAGE_KEY}.json")), payload)
        .expect("Failed to write test file");

    let store = StateStore::new(
        FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to create store"),
    );
    let board = store.try_load().expect("payload should decode");
    assert_eq!(board.next_id, 4);
    assert_eq!(board.columns.todo[0].created_at, 1_718_000_000_000);
    assert_eq!(board.columns.done[0].title, "Zakupy");
    assert!(board.validate().is_ok());
}

#[test]
fn test_custom_key_is_isolated() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_path_buf();

    let main = StateStore::new(FileStore::new(dir.clone()).expect("store"));
    let other = StateStore::with_key(FileStore::new(dir).expect("store"), "other-app");

    main.save(&create_test_board()).expect("save");
    assert_eq!(other.load().expect("load"), BoardState::default());
    assert_eq!(other.key(), "other-app");
}

#[test]
fn test_validate_detects_duplicates() {
    let mut board = create_test_board();
    let duplicate = board.columns.todo[0].clone();
    board.columns.done.push(duplicate);

    assert!(matches!(board.validate(), Err(Error::InvalidBoard(_))));
    assert_eq!(board.violations().len(), 1);
}

#[test]
fn test_validate_detects_stale_next_id() {
    let mut board = create_test_board();
    board.next_id = 2;

    let problems = board.violations();
    assert_eq!(problems.len(), 2, "cards 2 and 3 are not below nextId: {problems:?}");
}
