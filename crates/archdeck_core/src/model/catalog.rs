//! Catalog domain model.
//!
//! # Responsibility
//! - Define the immutable records a catalog dataset is built from.
//! - Keep wire naming stable for the embedded JSON datasets.
//!
//! # Invariants
//! - `Item::id` is unique across the whole catalog, not only its group.
//! - Records are never mutated after load. Interaction state lives in
//!   `crate::state`, never here.
//! - Group and item identifiers are lowercase kebab-case.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog-wide item identifier, e.g. `sidecar`.
pub type ItemId = String;
/// Group identifier, unique within one catalog.
pub type GroupId = String;
/// Plan period number (a week in both built-in catalogs). Always `>= 1`.
pub type Period = u32;

static IDENTIFIER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("identifier pattern must compile")
});

/// Returns whether `value` is a well-formed group/item identifier.
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(value)
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Short display glyph. Opaque to core.
    #[serde(default)]
    pub icon: String,
    /// What the component is.
    pub description: String,
    /// Why it is there.
    pub rationale: String,
    /// How to build it. Absent for some items.
    #[serde(default)]
    pub build: Option<String>,
}

impl Item {
    pub fn has_build(&self) -> bool {
        self.build
            .as_deref()
            .is_some_and(|recipe| !recipe.trim().is_empty())
    }
}

/// Labeled catalog section holding an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub label: String,
    /// `None` when the group is not scheduled in any plan period.
    #[serde(default)]
    pub period: Option<Period>,
    pub items: Vec<Item>,
}

/// Running component shown on the service map.
///
/// `depends_on` holds display names, not item identifiers. The relation is
/// informational and never validated as a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub language: String,
    pub workload: String,
    pub pattern: String,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// Narrative plan for one period. Joined to groups by `period`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub period: Period,
    pub title: String,
    pub focus: String,
    pub outcome: String,
    #[serde(default)]
    pub daily: Option<String>,
}

/// One row of the comparison view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub topic: String,
    /// What the infrastructure project covers for this topic.
    pub infra: String,
    /// What the application project covers for this topic.
    pub application: String,
    pub insight: String,
}

/// Follow-up question table keyed by item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTable {
    /// Used for every identifier missing from `entries`, and for no selection.
    pub default: String,
    #[serde(default)]
    pub entries: BTreeMap<ItemId, String>,
}

/// Complete pre-loaded dataset for one catalog instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub title: String,
    pub groups: Vec<Group>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default)]
    pub plan: Vec<PlanEntry>,
    #[serde(default)]
    pub comparison: Vec<ComparisonRow>,
    #[serde(default)]
    pub prompts: Option<PromptTable>,
}

impl Catalog {
    /// Decodes a catalog from its JSON form. Performs no semantic checks;
    /// see `CatalogStore::load` for those.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Iterates every item in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }
}
