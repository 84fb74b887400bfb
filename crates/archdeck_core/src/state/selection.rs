//! Item selection slice.
//!
//! # Invariants
//! - At most one item identifier is selected.
//! - Selecting the selected identifier again clears the selection.
//! - An identifier unknown to the store resolves to no item, never an error.

use crate::model::catalog::{Item, ItemId};
use crate::store::catalog_store::CatalogStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ItemId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle-selects `item_id`.
    ///
    /// - Same identifier as the current selection: deselects.
    /// - Anything else: replaces the current selection.
    pub fn select(&mut self, item_id: &str) {
        if self.selected.as_deref() == Some(item_id) {
            self.selected = None;
        } else {
            self.selected = Some(item_id.to_string());
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected.as_deref() == Some(item_id)
    }

    /// Resolves the selection through the store index.
    pub fn current<'a>(&self, store: &'a CatalogStore) -> Option<&'a Item> {
        store.item(self.selected.as_deref()?)
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionState;

    #[test]
    fn starts_empty() {
        let selection = SelectionState::new();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn reselect_clears_and_other_id_replaces() {
        let mut selection = SelectionState::new();

        selection.select("sidecar");
        assert!(selection.is_selected("sidecar"));

        selection.select("probes");
        assert_eq!(selection.selected(), Some("probes"));
        assert!(!selection.is_selected("sidecar"));

        selection.select("probes");
        assert_eq!(selection.selected(), None);
    }
}
