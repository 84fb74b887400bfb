//! Item identifier index.
//!
//! # Responsibility
//! - Map every item identifier to its position in the group list.
//! - Detect duplicate identifiers while building.
//!
//! # Invariants
//! - Built once per store; lookups never re-flatten the group list.
//! - Positions stay valid because the group list is immutable after load.

use crate::model::catalog::{Group, Item, ItemId};
use std::collections::HashMap;

/// Position of one item inside `groups[group].items[item]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLocation {
    pub group: usize,
    pub item: usize,
}

/// Identifier collision found while indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateItem {
    pub item_id: ItemId,
    pub first_group: String,
    pub second_group: String,
}

/// Memoized identifier -> item lookup table.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    by_id: HashMap<ItemId, ItemLocation>,
}

impl CatalogIndex {
    /// Indexes all items in one pass.
    ///
    /// Fails on the first identifier seen twice, in the same group or across
    /// groups.
    pub fn build(groups: &[Group]) -> Result<Self, DuplicateItem> {
        let capacity = groups.iter().map(|group| group.items.len()).sum();
        let mut by_id = HashMap::with_capacity(capacity);

        for (group_pos, group) in groups.iter().enumerate() {
            for (item_pos, item) in group.items.iter().enumerate() {
                let location = ItemLocation {
                    group: group_pos,
                    item: item_pos,
                };
                if let Some(previous) = by_id.insert(item.id.clone(), location) {
                    return Err(DuplicateItem {
                        item_id: item.id.clone(),
                        first_group: groups[previous.group].id.clone(),
                        second_group: group.id.clone(),
                    });
                }
            }
        }

        Ok(Self { by_id })
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.by_id.contains_key(item_id)
    }

    pub fn locate(&self, item_id: &str) -> Option<ItemLocation> {
        self.by_id.get(item_id).copied()
    }

    /// Resolves an identifier against the group list this index was built from.
    ///
    /// Unknown identifiers resolve to `None`.
    pub fn resolve<'a>(&self, groups: &'a [Group], item_id: &str) -> Option<&'a Item> {
        let location = self.locate(item_id)?;
        groups
            .get(location.group)
            .and_then(|group| group.items.get(location.item))
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogIndex, ItemLocation};
    use crate::model::catalog::{Group, Item};

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_uppercase(),
            icon: String::new(),
            description: format!("{id} description"),
            rationale: format!("{id} rationale"),
            build: None,
        }
    }

    fn group(id: &str, items: &[&str]) -> Group {
        Group {
            id: id.to_string(),
            label: id.to_uppercase(),
            period: None,
            items: items.iter().map(|value| item(value)).collect(),
        }
    }

    #[test]
    fn indexes_every_item_across_groups() {
        let groups = vec![group("a", &["x", "y"]), group("b", &["z"])];
        let index = CatalogIndex::build(&groups).expect("unique ids should index");

        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
        assert_eq!(index.locate("z"), Some(ItemLocation { group: 1, item: 0 }));
        assert_eq!(
            index.resolve(&groups, "y").map(|found| found.name.as_str()),
            Some("Y")
        );
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        let groups = vec![group("a", &["x"])];
        let index = CatalogIndex::build(&groups).expect("index");

        assert!(!index.contains("missing"));
        assert!(index.resolve(&groups, "missing").is_none());
    }

    #[test]
    fn rejects_duplicate_across_groups() {
        let groups = vec![group("pods", &["probes"]), group("mesh", &["probes"])];
        let duplicate = CatalogIndex::build(&groups).expect_err("duplicate must fail");

        assert_eq!(duplicate.item_id, "probes");
        assert_eq!(duplicate.first_group, "pods");
        assert_eq!(duplicate.second_group, "mesh");
    }

    #[test]
    fn rejects_duplicate_within_group() {
        let groups = vec![group("pods", &["pdb", "pdb"])];
        let duplicate = CatalogIndex::build(&groups).expect_err("duplicate must fail");
        assert_eq!(duplicate.first_group, duplicate.second_group);
    }
}
