//! In-memory backing store for unit and integration testing.
//!
//! Holds the row table in an `Arc<Mutex<Vec<SheetRow>>>` shared between the
//! connector and every handle it issues, so a test can save through one
//! handle and observe the result through the connector.  Failure-injection
//! switches let tests exercise each error path of the synchroniser without
//! a real (or unreliable) backing service.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use board_core::SheetRow;

use super::{StoreConnector, StoreError, StoreHandle};

/// A [`StoreConnector`] backed by a shared in-memory row table.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<Vec<SheetRow>>>,
    fail_connect: Arc<AtomicBool>,
    fail_read: Arc<AtomicBool>,
    fail_write: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Creates an empty store (no worksheet yet; `connect()` will create the
    /// header row, mirroring first-run behaviour of the real service).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `rows` (header included, if desired).
    pub fn with_rows(rows: Vec<SheetRow>) -> Self {
        let store = Self::default();
        *store.rows.lock().expect("lock poisoned") = rows;
        store
    }

    /// Snapshot of the current table contents.
    pub fn rows(&self) -> Vec<SheetRow> {
        self.rows.lock().expect("lock poisoned").clone()
    }

    /// When set, `connect()` fails with [`StoreError::Unreachable`].
    pub fn set_fail_connect(&self, fail: bool) {
        self.fail_connect.store(fail, Ordering::SeqCst);
    }

    /// When set, `read_all_rows()` fails with [`StoreError::Read`].
    pub fn set_fail_read(&self, fail: bool) {
        self.fail_read.store(fail, Ordering::SeqCst);
    }

    /// When set, `write_rows()` fails with [`StoreError::Write`].
    /// `clear()` still succeeds, so tests can cover the cleared-but-unwritten
    /// window.
    pub fn set_fail_write(&self, fail: bool) {
        self.fail_write.store(fail, Ordering::SeqCst);
    }
}

impl StoreConnector for MemoryStore {
    fn connect(&self) -> Result<Box<dyn StoreHandle>, StoreError> {
        if self.fail_connect.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable(
                "injected connect failure".to_string(),
            ));
        }

        // First run: create the worksheet by writing the header row.
        {
            let mut rows = self.rows.lock().expect("lock poisoned");
            if rows.is_empty() {
                rows.push(SheetRow::header());
            }
        }

        Ok(Box::new(MemoryHandle {
            rows: Arc::clone(&self.rows),
            fail_read: Arc::clone(&self.fail_read),
            fail_write: Arc::clone(&self.fail_write),
        }))
    }
}

/// Handle issued by [`MemoryStore`]; shares the connector's row table.
struct MemoryHandle {
    rows: Arc<Mutex<Vec<SheetRow>>>,
    fail_read: Arc<AtomicBool>,
    fail_write: Arc<AtomicBool>,
}

impl StoreHandle for MemoryHandle {
    fn read_all_rows(&mut self) -> Result<Vec<SheetRow>, StoreError> {
        if self.fail_read.load(Ordering::SeqCst) {
            return Err(StoreError::Read("injected read failure".to_string()));
        }
        Ok(self.rows.lock().expect("lock poisoned").clone())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.rows.lock().expect("lock poisoned").clear();
        Ok(())
    }

    fn write_rows(&mut self, rows: &[SheetRow]) -> Result<(), StoreError> {
        if self.fail_write.load(Ordering::SeqCst) {
            return Err(StoreError::Write("injected write failure".to_string()));
        }
        let mut table = self.rows.lock().expect("lock poisoned");
        table.clear();
        table.extend_from_slice(rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_on_empty_store_creates_the_header_row() {
        // Arrange
        let store = MemoryStore::new();

        // Act
        let _handle = store.connect().expect("connect must succeed");

        // Assert
        assert_eq!(store.rows(), vec![SheetRow::header()]);
    }

    #[test]
    fn test_connect_failure_switch_produces_unreachable() {
        let store = MemoryStore::new();
        store.set_fail_connect(true);

        let result = store.connect();
        assert!(matches!(result, Err(StoreError::Unreachable(_))));
        // Nothing was created
        assert!(store.rows().is_empty());
    }

    #[test]
    fn test_write_failure_leaves_clear_observable() {
        // Arrange: a store with a header plus one data row
        let store = MemoryStore::with_rows(vec![
            SheetRow::header(),
            SheetRow::new("general", "old text", "strategy"),
        ]);
        store.set_fail_write(true);
        let mut handle = store.connect().expect("connect must succeed");

        // Act: clear succeeds, the write that follows fails
        handle.clear().expect("clear must succeed");
        let write = handle.write_rows(&[SheetRow::header()]);

        // Assert: the table is left empty — the accepted mid-save window
        assert!(matches!(write, Err(StoreError::Write(_))));
        assert!(store.rows().is_empty());
    }

    #[test]
    fn test_handles_share_one_table_with_the_connector() {
        let store = MemoryStore::new();
        let mut writer = store.connect().expect("connect");
        writer
            .write_rows(&[SheetRow::header(), SheetRow::new("notes", "x", "notion")])
            .expect("write");

        let mut reader = store.connect().expect("connect");
        let rows = reader.read_all_rows().expect("read");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].category, "notion");
    }
}
