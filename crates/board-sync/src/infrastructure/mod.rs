//! Infrastructure layer for the status board synchroniser.
//!
//! Contains the outward-facing adapters: the tabular-store seam and its
//! concrete backends, plus settings-file loading.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `board_core`, but MUST NOT be imported by the domain layer.

pub mod settings;
pub mod store;
