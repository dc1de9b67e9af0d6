//! Application layer use cases for the synchroniser.
//!
//! Use cases in this layer orchestrate the domain (`board_core`) against the
//! store seam, depend on traits rather than concrete adapters, and contain no
//! file-system or network calls of their own.
//!
//! # Sub-modules
//!
//! - **`sync_document`** – The full round trip between the in-memory status
//!   document and the flat backing table: load-with-defaults and
//!   whole-document save.  This is the system's only non-trivial flow — it
//!   runs once at start-up and once per edit.

pub mod sync_document;
