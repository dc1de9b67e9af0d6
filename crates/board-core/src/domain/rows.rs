//! The flat row representation kept in the backing store, and the two
//! conversions between it and [`StatusDocument`].
//!
//! The backing store is a spreadsheet-style table with three columns:
//! `key`, `value`, `category`.  Row 0 is always the header row.  Data rows
//! come in two shapes:
//!
//! ```text
//! key                      value            category
//! ───────────────────────  ───────────────  ─────────
//! general                  <free text>      strategy
//! cloud_vs_onprem          <free text>      strategy
//! continuous_improvement   <free text>      strategy
//! progress                 <free text>      bigquery
//! notes                    <free text>      bigquery
//! ...                      ...              website / notion / recording
//! ```
//!
//! Flattening is deterministic: a document always produces the same twelve
//! rows in the same order (header, three strategy rows, then progress/notes
//! per resource).  Applying goes the other way, one row at a time, and
//! silently skips rows it does not recognise so that a table written by a
//! newer schema still loads.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::document::{ResourceField, ResourceKind, StatusDocument, StrategyKey};

/// The `category` column value shared by the three strategy rows.
pub const STRATEGY_CATEGORY: &str = "strategy";

/// One `(key, value, category)` triple in the flat backing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub key: String,
    pub value: String,
    pub category: String,
}

impl SheetRow {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            category: category.into(),
        }
    }

    /// The mandatory header row written at index 0 of every table.
    pub fn header() -> Self {
        SheetRow::new("key", "value", "category")
    }

    /// `true` if this row spells out the column names rather than data.
    pub fn is_header(&self) -> bool {
        self == &SheetRow::header()
    }
}

/// Flattens `doc` into the full table contents: exactly twelve rows, header
/// first, in the canonical slot order.
pub fn flatten_document(doc: &StatusDocument) -> Vec<SheetRow> {
    let mut rows = Vec::with_capacity(12);
    rows.push(SheetRow::header());

    for key in StrategyKey::ALL {
        rows.push(SheetRow::new(
            key.as_str(),
            doc.strategy.slot(key),
            STRATEGY_CATEGORY,
        ));
    }

    for kind in ResourceKind::ALL {
        for field in ResourceField::ALL {
            rows.push(SheetRow::new(
                field.as_str(),
                doc.resource(kind).field(field),
                kind.as_str(),
            ));
        }
    }

    rows
}

/// Applies one data row to `doc` as an override.
///
/// Returns `true` if the row addressed a known slot and was applied.  Rows
/// with an unrecognised `category`/`key` pair are skipped (and traced), so an
/// older binary tolerates rows written by a newer schema.
pub fn apply_override(doc: &mut StatusDocument, row: &SheetRow) -> bool {
    if row.category == STRATEGY_CATEGORY {
        match StrategyKey::parse(&row.key) {
            Some(key) => {
                *doc.strategy.slot_mut(key) = row.value.clone();
                return true;
            }
            None => {
                debug!(key = %row.key, "skipping unknown strategy row");
                return false;
            }
        }
    }

    match (ResourceKind::parse(&row.category), ResourceField::parse(&row.key)) {
        (Some(kind), Some(field)) => {
            *doc.resource_mut(kind).field_mut(field) = row.value.clone();
            true
        }
        _ => {
            debug!(key = %row.key, category = %row.category, "skipping unknown row");
            false
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
