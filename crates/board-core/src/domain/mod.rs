//! Domain entities for the project status board.
//!
//! This module contains pure business logic with no infrastructure
//! dependencies: no file system, no network, no terminal.  Everything here
//! can be compiled and tested on any platform without external setup.
//!
//! Code in outer layers (the store adapters, the sync use case, the CLI)
//! depends on this module; this module never depends on them.

/// The nested status document and its fixed slot sets.
pub mod document;

/// The flat `(key, value, category)` row table and the document↔rows mapping.
pub mod rows;
