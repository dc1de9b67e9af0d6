//! DocumentSync: the load/save round trip for the status document.
//!
//! Exactly two entry points and no state kept between them — every call
//! reconnects through the [`StoreConnector`], matching the one-shot,
//! per-edit model of the board.
//!
//! # Failure policy
//!
//! Nothing here is ever fatal to the hosting process:
//!
//! - [`DocumentSync::load`] cannot fail.  Any problem — connect, read,
//!   malformed table — degrades to the compiled-in default document, with a
//!   warning traced for the operator.  A failure mid-read discards all
//!   overrides rather than returning a half-merged document.
//! - [`DocumentSync::save`] returns a [`StoreError`] the caller reports and
//!   moves on from.  No retry is attempted.
//!
//! # The clear-then-write window
//!
//! `save` replaces the whole table: `clear()` followed by one bulk
//! `write_rows()`.  If the write fails after the clear succeeded, the table
//! is left empty until the next successful save.  This mirrors the original
//! dashboard's behaviour and is accepted: the next `load` falls back to
//! defaults, and the document still lives in the editing process's memory.

use board_core::{apply_override, flatten_document, StatusDocument};
use tracing::{debug, info, warn};

use crate::infrastructure::store::{StoreConnector, StoreError};

/// Bidirectional mapping between the in-memory [`StatusDocument`] and the
/// flat row table behind a [`StoreConnector`].
pub struct DocumentSync<C: StoreConnector> {
    connector: C,
}

impl<C: StoreConnector> DocumentSync<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Loads the status document, falling back to the compiled-in defaults
    /// on any failure.  Never fails, always returns a fully-populated
    /// document.
    pub fn load(&self) -> StatusDocument {
        let defaults = StatusDocument::default();

        let mut handle = match self.connector.connect() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("cannot reach the backing store, using defaults: {e}");
                return defaults;
            }
        };

        let rows = match handle.read_all_rows() {
            Ok(rows) => rows,
            Err(e) => {
                warn!("failed to read the backing store, using defaults: {e}");
                return defaults;
            }
        };

        // Row 0 is the header; a header-only (or empty) table is a first run
        // with no overrides saved yet.
        if rows.len() <= 1 {
            debug!("backing store holds no overrides, using defaults");
            return defaults;
        }

        let mut doc = defaults;
        let applied = rows[1..]
            .iter()
            .filter(|row| apply_override(&mut doc, row))
            .count();
        debug!(applied, total = rows.len() - 1, "applied store overrides");
        doc
    }

    /// Persists `doc` by replacing the entire table with its flattened form:
    /// header row plus the eleven data rows, in canonical order.
    ///
    /// All-or-nothing at the call level: a connect failure aborts before
    /// anything is written.  A write failure after the clear leaves the table
    /// empty (see the module docs).
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StoreError`]; callers report it and continue.
    pub fn save(&self, doc: &StatusDocument) -> Result<(), StoreError> {
        let mut handle = self.connector.connect()?;

        let rows = flatten_document(doc);
        handle.clear()?;
        handle.write_rows(&rows)?;

        info!(rows = rows.len(), "status document saved");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
