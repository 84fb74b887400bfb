//! Follow-up prompt resolution.
//!
//! # Invariants
//! - `resolve` is total: every input, including no selection, yields text.
//! - The special cases live in one table; there is no per-identifier branching.
//! - Entries keyed by identifiers outside the catalog index never resolve.

use crate::model::catalog::{ItemId, PromptTable};
use crate::store::index::CatalogIndex;
use std::collections::BTreeMap;

/// Outcome of one resolution, keeping the fallback branch explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<'a> {
    /// Question configured for the selected item.
    Specific(&'a str),
    /// Fallback used for unselected or unlisted items.
    Default(&'a str),
}

impl<'a> Prompt<'a> {
    pub fn text(self) -> &'a str {
        match self {
            Self::Specific(text) | Self::Default(text) => text,
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, Self::Default(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResolver {
    entries: BTreeMap<ItemId, String>,
    default: String,
}

impl PromptResolver {
    pub fn new(table: PromptTable) -> Self {
        Self {
            entries: table.entries,
            default: table.default,
        }
    }

    /// Builds a resolver that keeps only entries for indexed items.
    pub fn for_index(table: &PromptTable, index: &CatalogIndex) -> Self {
        let entries = table
            .entries
            .iter()
            .filter(|(item_id, _)| index.contains(item_id.as_str()))
            .map(|(item_id, question)| (item_id.clone(), question.clone()))
            .collect();
        Self::new(PromptTable {
            default: table.default.clone(),
            entries,
        })
    }

    pub fn resolve(&self, selected: Option<&str>) -> Prompt<'_> {
        match selected.and_then(|item_id| self.entries.get(item_id)) {
            Some(question) => Prompt::Specific(question.as_str()),
            None => Prompt::Default(self.default.as_str()),
        }
    }

    pub fn default_prompt(&self) -> &str {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
