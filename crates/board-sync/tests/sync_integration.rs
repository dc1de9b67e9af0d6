//! Integration tests for the document synchroniser.
//!
//! These exercise the application layer of board-sync end-to-end:
//! `DocumentSync` + the row mapping from board-core + a real store adapter
//! (in-memory, and the CSV file adapter through a temp directory).

use std::path::PathBuf;

use uuid::Uuid;

use board_core::{SheetRow, StatusDocument};
use board_sync::application::sync_document::DocumentSync;
use board_sync::infrastructure::store::csv_file::CsvFileStore;
use board_sync::infrastructure::store::memory::MemoryStore;
use board_sync::infrastructure::store::StoreConnector;

// ── In-memory store ───────────────────────────────────────────────────────────

#[test]
fn test_load_after_save_returns_an_equal_document() {
    // Arrange: a document edited in every section
    let store = MemoryStore::new();
    let sync = DocumentSync::new(store);
    let mut doc = StatusDocument::default();
    doc.strategy.general = "shift evaluation to weekly cadence".to_string();
    doc.strategy.cloud_vs_onprem = "hybrid, keep raw data on-prem".to_string();
    doc.bigquery.progress = "joins landed".to_string();
    doc.recording.notes = "embeddings batched overnight".to_string();

    // Act
    sync.save(&doc).expect("save must succeed");
    let loaded = sync.load();

    // Assert
    assert_eq!(loaded, doc);
}

#[test]
fn test_load_on_unreachable_store_returns_the_default_document() {
    let store = MemoryStore::new();
    store.set_fail_connect(true);

    let loaded = DocumentSync::new(store.clone()).load();

    assert_eq!(loaded, StatusDocument::default());
    // The store was never touched
    assert!(store.rows().is_empty());
}

#[test]
fn test_load_on_freshly_created_store_returns_the_default_document() {
    // First connect creates the worksheet with only the header row.
    let store = MemoryStore::new();
    drop(store.connect().expect("first connect"));

    let loaded = DocumentSync::new(store.clone()).load();

    assert_eq!(store.rows(), vec![SheetRow::header()]);
    assert_eq!(loaded, StatusDocument::default());
}

#[test]
fn test_load_applies_known_rows_and_ignores_mystery_rows() {
    let store = MemoryStore::with_rows(vec![
        SheetRow::header(),
        SheetRow::new("progress", "tagging round two".to_string(), "website"),
        SheetRow::new("progress", "???", "mystery"),
    ]);

    let loaded = DocumentSync::new(store).load();

    let mut expected = StatusDocument::default();
    expected.website.progress = "tagging round two".to_string();
    assert_eq!(loaded, expected);
}

#[test]
fn test_save_writes_the_fixed_twelve_row_table() {
    let store = MemoryStore::new();
    let sync = DocumentSync::new(store.clone());

    sync.save(&StatusDocument::default()).expect("save");

    let rows = store.rows();
    let shape: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.key.as_str(), r.category.as_str()))
        .collect();
    assert_eq!(
        shape,
        vec![
            ("key", "category"),
            ("general", "strategy"),
            ("cloud_vs_onprem", "strategy"),
            ("continuous_improvement", "strategy"),
            ("progress", "bigquery"),
            ("notes", "bigquery"),
            ("progress", "website"),
            ("notes", "website"),
            ("progress", "notion"),
            ("notes", "notion"),
            ("progress", "recording"),
            ("notes", "recording"),
        ]
    );
}

#[test]
fn test_partial_override_keeps_every_other_slot_at_default() {
    let store = MemoryStore::with_rows(vec![
        SheetRow::header(),
        SheetRow::new("progress", "only this changed", "bigquery"),
    ]);

    let loaded = DocumentSync::new(store).load();

    let defaults = StatusDocument::default();
    assert_eq!(loaded.bigquery.progress, "only this changed");
    assert_eq!(loaded.bigquery.notes, defaults.bigquery.notes);
    assert_eq!(loaded.strategy, defaults.strategy);
    assert_eq!(loaded.website, defaults.website);
    assert_eq!(loaded.notion, defaults.notion);
    assert_eq!(loaded.recording, defaults.recording);
}

#[test]
fn test_failed_save_is_reported_and_the_next_load_still_works() {
    // Arrange: a store that accepts the clear but rejects the bulk write
    let store = MemoryStore::new();
    let sync = DocumentSync::new(store.clone());
    sync.save(&StatusDocument::default()).expect("initial save");
    store.set_fail_write(true);

    // Act: the save fails as a value, not a panic
    let result = sync.save(&StatusDocument::default());
    assert!(result.is_err());

    // Assert: the accepted gap — the table was cleared — and the caller can
    // carry on: the next load degrades to defaults instead of failing.
    assert!(store.rows().is_empty());
    assert_eq!(sync.load(), StatusDocument::default());
}

// ── CSV file adapter ──────────────────────────────────────────────────────────

fn temp_table_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("board_sync_itest_{}", Uuid::new_v4()))
        .join("dashboard_data.csv")
}

#[test]
fn test_round_trip_through_a_csv_file() {
    // Arrange
    let path = temp_table_path();
    let mut doc = StatusDocument::default();
    doc.notion.notes = "ingredient links done,\nnext: dosage guidance".to_string();

    // Act: save through one connector, load through a fresh one (no handle
    // or connection reuse between the two operations)
    DocumentSync::new(CsvFileStore::new(&path))
        .save(&doc)
        .expect("save");
    let loaded = DocumentSync::new(CsvFileStore::new(&path)).load();

    // Assert
    assert_eq!(loaded, doc);

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[test]
fn test_first_run_against_a_missing_file_yields_defaults() {
    let path = temp_table_path();

    let loaded = DocumentSync::new(CsvFileStore::new(&path)).load();

    // connect() created the table with just its header; no overrides yet
    assert_eq!(loaded, StatusDocument::default());
    assert!(path.exists());

    std::fs::remove_dir_all(path.parent().unwrap()).ok();
}
