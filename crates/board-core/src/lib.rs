//! # board-core
//!
//! Shared library for the project status board containing the status document
//! model, the compiled-in default content, and the mapping between the nested
//! document and the flat row table kept in the backing store.
//!
//! This crate is used by the sync application and by every test that needs a
//! document fixture. It has zero dependencies on file systems, network
//! clients, or terminal code.
//!
//! # Architecture overview (for beginners)
//!
//! The status board is a read-modify-write system: a small nested document
//! (strategy notes plus per-resource progress notes) lives in memory while a
//! person edits it, and the whole document is written back to a flat
//! spreadsheet-style table on every change.  This crate defines:
//!
//! - **`domain::document`** – The nested document itself.  Every slot in the
//!   document is known at compile time, so the slots are Rust enums rather
//!   than free-form string keys, and the document struct is always fully
//!   populated.
//!
//! - **`domain::rows`** – The flat representation: `(key, value, category)`
//!   triples with a mandatory header row, plus the two conversions — flatten
//!   a document into exactly twelve rows, and apply a single row back onto a
//!   document as an override.

// Declare the top-level module.  Rust will look for it in src/domain/mod.rs.
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `board_core::StatusDocument` instead of `board_core::domain::document::StatusDocument`.
pub use domain::document::{
    ResourceField, ResourceKind, ResourceStatus, Slot, SlotParseError, StatusDocument,
    StrategyKey, StrategyNotes,
};
pub use domain::rows::{apply_override, flatten_document, SheetRow, STRATEGY_CATEGORY};
