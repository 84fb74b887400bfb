//! Expanded plan period slice.
//!
//! Same toggle shape as `SelectionState`, keyed by period number. Only the
//! plan view reads it.

use crate::model::catalog::{Period, PlanEntry};
use crate::store::catalog_store::CatalogStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Option<Period>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands `period`, or collapses it when it is already open.
    pub fn toggle(&mut self, period: Period) {
        self.expanded = if self.expanded == Some(period) {
            None
        } else {
            Some(period)
        };
    }

    pub fn expanded(&self) -> Option<Period> {
        self.expanded
    }

    pub fn is_expanded(&self, period: Period) -> bool {
        self.expanded == Some(period)
    }

    /// Plan entry for the open period, if any.
    pub fn current<'a>(&self, store: &'a CatalogStore) -> Option<&'a PlanEntry> {
        store.plan_entry(self.expanded?)
    }
}

#[cfg(test)]
mod tests {
    use super::AccordionState;

    #[test]
    fn at_most_one_period_open() {
        let mut accordion = AccordionState::new();
        accordion.toggle(1);
        accordion.toggle(3);

        assert_eq!(accordion.expanded(), Some(3));
        assert!(!accordion.is_expanded(1));
    }

    #[test]
    fn double_toggle_restores_prior_value() {
        let mut accordion = AccordionState::new();
        for period in 1..=4 {
            accordion.toggle(period);
            accordion.toggle(period);
            assert_eq!(accordion.expanded(), None);
        }

        accordion.toggle(2);
        let before = accordion;
        accordion.toggle(2);
        accordion.toggle(2);
        assert_eq!(accordion, before);
    }
}
