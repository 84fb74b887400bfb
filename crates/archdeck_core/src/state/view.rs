//! Active view slice.
//!
//! # Invariants
//! - Exactly one view is active at any time; there is no "no view" state.
//! - `set_active` always succeeds and never toggles. Re-selecting the active
//!   view is a no-op.

use serde::Serialize;
use std::fmt::Debug;

/// Closed set of views offered by one catalog instance.
pub trait ViewSet: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every view, in tab order.
    const ALL: &'static [Self];

    /// View shown when a session starts.
    fn default_view() -> Self;

    /// Stable identifier used across the UI boundary.
    fn as_str(self) -> &'static str;

    /// Tab caption.
    fn label(self) -> &'static str;

    /// Parses a stable identifier. Exact, case-sensitive match.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|view| view.as_str() == value)
    }

    /// Stable identifiers of every view, in tab order.
    fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|view| view.as_str()).collect()
    }
}

/// Tab descriptor handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTab {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState<V: ViewSet> {
    active: V,
}

impl<V: ViewSet> Default for ViewState<V> {
    fn default() -> Self {
        Self {
            active: V::default_view(),
        }
    }
}

impl<V: ViewSet> ViewState<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active(&mut self, view: V) {
        self.active = view;
    }

    pub fn active(&self) -> V {
        self.active
    }

    pub fn is_active(&self, view: V) -> bool {
        self.active == view
    }

    pub fn tabs(&self) -> Vec<ViewTab> {
        V::ALL
            .iter()
            .map(|view| ViewTab {
                id: view.as_str(),
                label: view.label(),
                active: self.is_active(*view),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewSet, ViewState};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Grid,
        List,
    }

    impl ViewSet for Mode {
        const ALL: &'static [Self] = &[Self::Grid, Self::List];

        fn default_view() -> Self {
            Self::Grid
        }

        fn as_str(self) -> &'static str {
            match self {
                Self::Grid => "grid",
                Self::List => "list",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Self::Grid => "Grid",
                Self::List => "List",
            }
        }
    }

    #[test]
    fn starts_on_default_view() {
        let state = ViewState::<Mode>::new();
        assert_eq!(state.active(), Mode::Grid);
    }

    #[test]
    fn reselecting_active_view_keeps_it_active() {
        let mut state = ViewState::<Mode>::new();
        state.set_active(Mode::List);
        state.set_active(Mode::List);
        assert_eq!(state.active(), Mode::List);
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(Mode::parse("list"), Some(Mode::List));
        assert_eq!(Mode::parse("List"), None);
        assert_eq!(Mode::parse(""), None);
        assert_eq!(Mode::ids(), vec!["grid", "list"]);
    }

    #[test]
    fn tabs_mark_exactly_one_active() {
        let mut state = ViewState::<Mode>::new();
        state.set_active(Mode::List);
        let tabs = state.tabs();
        assert_eq!(tabs.iter().filter(|tab| tab.active).count(), 1);
        assert_eq!(tabs[1].id, "list");
        assert!(tabs[1].active);
    }
}
