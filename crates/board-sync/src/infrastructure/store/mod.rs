//! The tabular-store seam: where the status board meets its backing store.
//!
//! The backing store is a spreadsheet-like external service that holds the
//! flat `(key, value, category)` table.  Talking to it is split into two
//! traits so that everything above this module stays testable:
//!
//! - [`StoreConnector`] – establishes a fresh handle for one load or save.
//!   Connecting covers authentication, opening the target resource, and
//!   locating (or creating, header row included) the worksheet used for the
//!   document.
//! - [`StoreHandle`] – the connected worksheet: bulk row read, clear, and
//!   bulk row write.
//!
//! # Why a trait seam? (for beginners)
//!
//! The real backing store is a remote service owned by someone else.  Unit
//! tests cannot (and should not) reach it, and the synchroniser's logic —
//! defaulting, override merging, failure fallback — is independent of which
//! store sits behind the seam.  Coding against these traits lets production
//! use the CSV file adapter while tests use [`memory::MemoryStore`] with
//! failure injection switches.
//!
//! There is deliberately no connection reuse: every load and save calls
//! `connect()` again, mirroring the one-shot, per-edit write model.

use board_core::SheetRow;
use thiserror::Error;

pub mod csv_file;
pub mod memory;

/// Error type for all backing-store operations.
///
/// The first three variants are connect-time failures; `Read` and `Write`
/// happen after a handle exists.  None of them are ever fatal to the hosting
/// process: callers fall back to defaults (load) or report and carry on
/// (save).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Credential material is missing or was rejected.
    #[error("store authentication failed: {0}")]
    Auth(String),

    /// The store service could not be reached.
    #[error("store unreachable: {0}")]
    Unreachable(String),

    /// The target resource or worksheet does not exist and could not be created.
    #[error("store resource not found: {0}")]
    NotFound(String),

    /// The handle exists but reading rows failed mid-flight.
    #[error("failed to read rows: {0}")]
    Read(String),

    /// Clearing or writing rows failed mid-flight.
    #[error("failed to write rows: {0}")]
    Write(String),
}

/// Establishes a fresh [`StoreHandle`] for a single load or save.
///
/// `connect()` must create the worksheet (with the header row at index 0)
/// when it does not exist yet, and must convert every failure — bad
/// credentials, unreachable service, missing resource — into a [`StoreError`],
/// never a panic.
pub trait StoreConnector {
    fn connect(&self) -> Result<Box<dyn StoreHandle>, StoreError>;
}

/// A connected worksheet holding the flat row table.
///
/// Rows are ordered; index 0 is the header row written by `connect()` or by
/// the last bulk write.
pub trait StoreHandle {
    /// Reads every row, header included, in table order.
    fn read_all_rows(&mut self) -> Result<Vec<SheetRow>, StoreError>;

    /// Removes all rows, header included.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Bulk-writes `rows` as the complete new table contents.
    fn write_rows(&mut self, rows: &[SheetRow]) -> Result<(), StoreError>;
}
