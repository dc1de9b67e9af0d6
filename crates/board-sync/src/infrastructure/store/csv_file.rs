//! CSV-file backing store adapter.
//!
//! Persists the flat row table as a three-column CSV file on local disk.
//! This is the shipped stand-in for the remote spreadsheet service: same row
//! semantics (ordered rows, header at index 0, bulk overwrite), different
//! transport.  Free-form note text may contain commas and newlines, which is
//! exactly what the `csv` crate's quoting rules exist for — do not be tempted
//! to `join(",")` by hand.
//!
//! `connect()` performs the adapter's version of "locate or create the
//! worksheet": it ensures the parent directory exists and creates the file
//! with the header row on first run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use board_core::SheetRow;
use tracing::info;

use super::{StoreConnector, StoreError, StoreHandle};

/// A [`StoreConnector`] backed by a CSV file on local disk.
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Maps a connect-time I/O failure onto the store error taxonomy.
fn connect_error(path: &Path, e: &std::io::Error) -> StoreError {
    let detail = format!("{}: {e}", path.display());
    match e.kind() {
        ErrorKind::PermissionDenied => StoreError::Auth(detail),
        ErrorKind::NotFound => StoreError::NotFound(detail),
        _ => StoreError::Unreachable(detail),
    }
}

impl StoreConnector for CsvFileStore {
    fn connect(&self) -> Result<Box<dyn StoreHandle>, StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|e| connect_error(dir, &e))?;
            }
        }

        if !self.path.exists() {
            // First run: create the table with its header row.
            let mut handle = CsvFileHandle {
                path: self.path.clone(),
            };
            handle.write_rows(&[SheetRow::header()])?;
            info!(path = %self.path.display(), "created new status table");
        }

        Ok(Box::new(CsvFileHandle {
            path: self.path.clone(),
        }))
    }
}

/// Handle issued by [`CsvFileStore`]; re-opens the file per operation.
struct CsvFileHandle {
    path: PathBuf,
}

impl StoreHandle for CsvFileHandle {
    fn read_all_rows(&mut self) -> Result<Vec<SheetRow>, StoreError> {
        // has_headers(false): the header row is data to us — the caller skips
        // row 0 itself, consistent with the remote-service row model.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| StoreError::Read(e.to_string()))?;
            rows.push(SheetRow::new(
                record.get(0).unwrap_or_default(),
                record.get(1).unwrap_or_default(),
                record.get(2).unwrap_or_default(),
            ));
        }
        Ok(rows)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        std::fs::write(&self.path, b"").map_err(|e| StoreError::Write(e.to_string()))
    }

    fn write_rows(&mut self, rows: &[SheetRow]) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| StoreError::Write(e.to_string()))?;

        for row in rows {
            writer
                .write_record([&row.key, &row.value, &row.category])
                .map_err(|e| StoreError::Write(e.to_string()))?;
        }
        writer.flush().map_err(|e| StoreError::Write(e.to_string()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    /// Fresh temp directory per test so parallel tests cannot collide.
    fn temp_table_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("board_sync_test_{}", Uuid::new_v4()))
            .join("dashboard_data.csv")
    }

    #[test]
    fn test_connect_on_first_run_creates_file_with_header_row() {
        // Arrange
        let path = temp_table_path();
        let store = CsvFileStore::new(&path);

        // Act
        let mut handle = store.connect().expect("connect must succeed");
        let rows = handle.read_all_rows().expect("read must succeed");

        // Assert
        assert!(path.exists());
        assert_eq!(rows, vec![SheetRow::header()]);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_write_then_read_round_trips_awkward_text() {
        // Arrange: values with commas, quotes, and newlines
        let path = temp_table_path();
        let store = CsvFileStore::new(&path);
        let rows = vec![
            SheetRow::header(),
            SheetRow::new("notes", "line one\nline two, with a comma", "recording"),
            SheetRow::new("progress", "said \"done\" on Friday", "website"),
        ];

        // Act
        let mut handle = store.connect().expect("connect");
        handle.write_rows(&rows).expect("write");
        let read_back = store
            .connect()
            .expect("reconnect")
            .read_all_rows()
            .expect("read");

        // Assert
        assert_eq!(read_back, rows);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_clear_leaves_an_empty_table() {
        let path = temp_table_path();
        let store = CsvFileStore::new(&path);

        let mut handle = store.connect().expect("connect");
        handle
            .write_rows(&[SheetRow::header(), SheetRow::new("general", "x", "strategy")])
            .expect("write");
        handle.clear().expect("clear");

        let rows = handle.read_all_rows().expect("read");
        assert!(rows.is_empty());

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_reconnect_does_not_rewrite_an_existing_table() {
        // connect() must only seed the header when the file is absent.
        let path = temp_table_path();
        let store = CsvFileStore::new(&path);

        let mut handle = store.connect().expect("connect");
        let rows = vec![SheetRow::header(), SheetRow::new("notes", "kept", "notion")];
        handle.write_rows(&rows).expect("write");
        drop(handle);

        let read_back = store
            .connect()
            .expect("reconnect")
            .read_all_rows()
            .expect("read");
        assert_eq!(read_back, rows);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
