//! The nested status document: strategy notes plus per-resource progress notes.
//!
//! Every slot in the document is fixed at compile time.  Rather than modelling
//! the document as a map of string keys (and then defending against missing
//! entries everywhere), the slot sets are enums and the document is a plain
//! struct — a `StatusDocument` is fully populated by construction and can
//! never have an absent field.
//!
//! `StatusDocument::default()` is the compiled-in default document: the seed
//! content shown before anyone has saved anything, and the fallback returned
//! whenever the backing store cannot be reached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Fixed slot sets ───────────────────────────────────────────────────────────

/// The three strategy slots, in canonical (persisted) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKey {
    /// General applicability of the modelling approach.
    General,
    /// Cloud versus on-premises trade-off notes.
    CloudVsOnPrem,
    /// Continuous improvement / fine-tuning loop notes.
    ContinuousImprovement,
}

impl StrategyKey {
    /// All strategy keys in the canonical order used when flattening.
    pub const ALL: [StrategyKey; 3] = [
        StrategyKey::General,
        StrategyKey::CloudVsOnPrem,
        StrategyKey::ContinuousImprovement,
    ];

    /// The persisted spelling of this key (the `key` column of a strategy row).
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKey::General => "general",
            StrategyKey::CloudVsOnPrem => "cloud_vs_onprem",
            StrategyKey::ContinuousImprovement => "continuous_improvement",
        }
    }

    /// Parses a persisted key column value.  Returns `None` for anything that
    /// is not one of the three known strategy keys.
    pub fn parse(s: &str) -> Option<StrategyKey> {
        StrategyKey::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

/// The four tracked resources, in canonical (persisted) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Data warehouse and analytics work.
    BigQuery,
    /// Company website / product knowledge work.
    Website,
    /// Notion knowledge base work.
    Notion,
    /// Sales-call recordings and the vector store built from them.
    Recording,
}

impl ResourceKind {
    /// All resources in the canonical order used when flattening.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::BigQuery,
        ResourceKind::Website,
        ResourceKind::Notion,
        ResourceKind::Recording,
    ];

    /// The persisted spelling of this resource (the `category` column).
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::BigQuery => "bigquery",
            ResourceKind::Website => "website",
            ResourceKind::Notion => "notion",
            ResourceKind::Recording => "recording",
        }
    }

    /// Human-readable title used when rendering the document.
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::BigQuery => "BigQuery resources",
            ResourceKind::Website => "Website / company resources",
            ResourceKind::Notion => "Notion knowledge base",
            ResourceKind::Recording => "Recordings / vector store",
        }
    }

    /// Parses a persisted category column value.  Returns `None` for anything
    /// that is not one of the four known resources.
    pub fn parse(s: &str) -> Option<ResourceKind> {
        ResourceKind::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

/// The two fields tracked per resource, in canonical (persisted) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceField {
    Progress,
    Notes,
}

impl ResourceField {
    /// Both fields in the canonical order used when flattening.
    pub const ALL: [ResourceField; 2] = [ResourceField::Progress, ResourceField::Notes];

    /// The persisted spelling of this field (the `key` column of a resource row).
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceField::Progress => "progress",
            ResourceField::Notes => "notes",
        }
    }

    /// Parses a persisted key column value.  Returns `None` for anything that
    /// is not `progress` or `notes`.
    pub fn parse(s: &str) -> Option<ResourceField> {
        ResourceField::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

// ── Document types ────────────────────────────────────────────────────────────

/// The three strategy text slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyNotes {
    pub general: String,
    pub cloud_vs_onprem: String,
    pub continuous_improvement: String,
}

impl StrategyNotes {
    /// Borrows the slot for `key`.
    pub fn slot(&self, key: StrategyKey) -> &str {
        match key {
            StrategyKey::General => &self.general,
            StrategyKey::CloudVsOnPrem => &self.cloud_vs_onprem,
            StrategyKey::ContinuousImprovement => &self.continuous_improvement,
        }
    }

    /// Mutably borrows the slot for `key`.
    pub fn slot_mut(&mut self, key: StrategyKey) -> &mut String {
        match key {
            StrategyKey::General => &mut self.general,
            StrategyKey::CloudVsOnPrem => &mut self.cloud_vs_onprem,
            StrategyKey::ContinuousImprovement => &mut self.continuous_improvement,
        }
    }
}

/// Free-form progress and notes text for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub progress: String,
    pub notes: String,
}

impl ResourceStatus {
    /// Borrows the text for `field`.
    pub fn field(&self, field: ResourceField) -> &str {
        match field {
            ResourceField::Progress => &self.progress,
            ResourceField::Notes => &self.notes,
        }
    }

    /// Mutably borrows the text for `field`.
    pub fn field_mut(&mut self, field: ResourceField) -> &mut String {
        match field {
            ResourceField::Progress => &mut self.progress,
            ResourceField::Notes => &mut self.notes,
        }
    }
}

/// The full in-memory status document.
///
/// Always fully populated: every strategy slot and every resource field holds
/// a string (possibly empty).  `Default` yields the compiled-in seed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDocument {
    pub strategy: StrategyNotes,
    pub bigquery: ResourceStatus,
    pub website: ResourceStatus,
    pub notion: ResourceStatus,
    pub recording: ResourceStatus,
}

impl StatusDocument {
    /// Borrows the status record for `kind`.
    pub fn resource(&self, kind: ResourceKind) -> &ResourceStatus {
        match kind {
            ResourceKind::BigQuery => &self.bigquery,
            ResourceKind::Website => &self.website,
            ResourceKind::Notion => &self.notion,
            ResourceKind::Recording => &self.recording,
        }
    }

    /// Mutably borrows the status record for `kind`.
    pub fn resource_mut(&mut self, kind: ResourceKind) -> &mut ResourceStatus {
        match kind {
            ResourceKind::BigQuery => &mut self.bigquery,
            ResourceKind::Website => &mut self.website,
            ResourceKind::Notion => &mut self.notion,
            ResourceKind::Recording => &mut self.recording,
        }
    }

    /// Borrows the text in one addressable slot.
    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::Strategy(key) => self.strategy.slot(key),
            Slot::Resource(kind, field) => self.resource(kind).field(field),
        }
    }

    /// Mutably borrows the text in one addressable slot.
    pub fn slot_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::Strategy(key) => self.strategy.slot_mut(key),
            Slot::Resource(kind, field) => self.resource_mut(kind).field_mut(field),
        }
    }
}

impl Default for StatusDocument {
    fn default() -> Self {
        Self {
            strategy: StrategyNotes {
                general: "BQML challenge: evaluate model limitations inside BigQuery \
                          and candidate workarounds."
                    .to_string(),
                cloud_vs_onprem: "Trade-off analysis: optimise resource allocation and \
                                  calculate cost effectiveness."
                    .to_string(),
                continuous_improvement: "Fine-tuning: build a loop for continuous model \
                                         optimisation and iteration."
                    .to_string(),
            },
            bigquery: ResourceStatus {
                progress: "Raw data ingestion complete; data cleaning in progress.".to_string(),
                notes: "Listing best-selling products first; linking the other indexes next."
                    .to_string(),
            },
            website: ResourceStatus {
                progress: "Site crawl finished; Bonsale tagging in progress.".to_string(),
                notes: "Consolidating sales knowledge into a product index.".to_string(),
            },
            notion: ResourceStatus {
                progress: "Product data imported; planning the topic taxonomy.".to_string(),
                notes: "Relating ingredients to target customer groups.".to_string(),
            },
            recording: ResourceStatus {
                progress: "Top-sales recordings transcribed; vectorisation trials running."
                    .to_string(),
                notes: "Milvus needs ~10x fewer tokens than the Gemini crawler and is \
                        faster; goal is full information coverage."
                    .to_string(),
            },
        }
    }
}

// ── Slot addressing ───────────────────────────────────────────────────────────

/// One addressable text slot in the document: either a strategy slot or one
/// field of one resource.
///
/// The textual form is `strategy.<key>` or `<resource>.<field>`, e.g.
/// `strategy.general` or `bigquery.progress`.  This is the spelling the CLI
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Strategy(StrategyKey),
    Resource(ResourceKind, ResourceField),
}

/// Error type for parsing a [`Slot`] from its textual form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotParseError {
    #[error("slot must look like `strategy.<key>` or `<resource>.<field>`, got {0:?}")]
    MissingSeparator(String),
    #[error("unknown strategy key {0:?} (expected general, cloud_vs_onprem, or continuous_improvement)")]
    UnknownStrategyKey(String),
    #[error("unknown resource {0:?} (expected bigquery, website, notion, or recording)")]
    UnknownResource(String),
    #[error("unknown resource field {0:?} (expected progress or notes)")]
    UnknownField(String),
}

impl FromStr for Slot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = s
            .split_once('.')
            .ok_or_else(|| SlotParseError::MissingSeparator(s.to_string()))?;

        if left == "strategy" {
            let key = StrategyKey::parse(right)
                .ok_or_else(|| SlotParseError::UnknownStrategyKey(right.to_string()))?;
            return Ok(Slot::Strategy(key));
        }

        let kind = ResourceKind::parse(left)
            .ok_or_else(|| SlotParseError::UnknownResource(left.to_string()))?;
        let field = ResourceField::parse(right)
            .ok_or_else(|| SlotParseError::UnknownField(right.to_string()))?;
        Ok(Slot::Resource(kind, field))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Strategy(key) => write!(f, "strategy.{}", key.as_str()),
            Slot::Resource(kind, field) => write!(f, "{}.{}", kind.as_str(), field.as_str()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
