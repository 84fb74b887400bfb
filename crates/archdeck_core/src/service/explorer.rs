//! Explorer session: state container, reducer and read-only projection.
//!
//! # Responsibility
//! - Hold the three stored state slices for one catalog session.
//! - Apply interaction events through a pure `reduce` function.
//! - Project current state into the shape the presentation layer renders.
//!
//! # Invariants
//! - Every event changes exactly one slice.
//! - The resolved prompt is derived on read, never stored.
//! - One session per catalog instance; sessions never share state.

use crate::model::catalog::{Item, ItemId, Period, PlanEntry};
use crate::state::accordion::AccordionState;
use crate::state::prompt::{Prompt, PromptResolver};
use crate::state::selection::SelectionState;
use crate::state::view::{ViewSet, ViewState, ViewTab};
use crate::store::catalog_store::{CatalogError, CatalogStore};
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Errors raised at the untyped UI boundary.
///
/// Typed events cannot fail; these only occur while turning strings into
/// events or while opening a session.
#[derive(Debug)]
pub enum ExplorerError {
    UnknownView {
        value: String,
        expected: Vec<&'static str>,
    },
    UnknownCatalog(String),
    InvalidCommand(String),
    Catalog(CatalogError),
}

impl Display for ExplorerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownView { value, expected } => write!(
                f,
                "unknown view `{value}`; expected {}",
                expected.join("|")
            ),
            Self::UnknownCatalog(value) => write!(f, "unknown catalog: `{value}`"),
            Self::InvalidCommand(message) => write!(f, "invalid command: {message}"),
            Self::Catalog(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogError> for ExplorerError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

/// One discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerEvent<V: ViewSet> {
    SelectItem(ItemId),
    SetView(V),
    TogglePeriod(Period),
}

impl<V: ViewSet> ExplorerEvent<V> {
    /// Builds a `SetView` event from a stable view identifier.
    pub fn parse_view(value: &str) -> Result<Self, ExplorerError> {
        V::parse(value)
            .map(Self::SetView)
            .ok_or_else(|| ExplorerError::UnknownView {
                value: value.to_string(),
                expected: V::ids(),
            })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::SelectItem(_) => "select_item",
            Self::SetView(_) => "set_view",
            Self::TogglePeriod(_) => "toggle_period",
        }
    }
}

/// All stored interaction state of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState<V: ViewSet> {
    pub selection: SelectionState,
    pub view: ViewState<V>,
    pub accordion: AccordionState,
}

impl<V: ViewSet> Default for ExplorerState<V> {
    fn default() -> Self {
        Self {
            selection: SelectionState::new(),
            view: ViewState::new(),
            accordion: AccordionState::new(),
        }
    }
}

/// Pure transition: `(state, event) -> state`.
pub fn reduce<V: ViewSet>(state: &ExplorerState<V>, event: &ExplorerEvent<V>) -> ExplorerState<V> {
    let mut next = state.clone();
    match event {
        ExplorerEvent::SelectItem(item_id) => next.selection.select(item_id),
        ExplorerEvent::SetView(view) => next.view.set_active(*view),
        ExplorerEvent::TogglePeriod(period) => next.accordion.toggle(*period),
    }
    next
}

/// Read-only projection of a session, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorerSnapshot {
    pub session_id: String,
    pub title: String,
    pub active_view: &'static str,
    pub views: Vec<ViewTab>,
    pub selected: Option<Item>,
    pub expanded: Option<PlanEntry>,
    /// Items scheduled in the expanded period, in catalog order.
    pub expanded_items: Vec<Item>,
    /// `None` when the catalog has no prompt table.
    pub prompt: Option<String>,
}

/// Single interactive session over one validated catalog.
#[derive(Debug, Clone)]
pub struct ExplorerSession<V: ViewSet> {
    session_id: Uuid,
    store: CatalogStore,
    prompts: Option<PromptResolver>,
    state: ExplorerState<V>,
}

impl<V: ViewSet> ExplorerSession<V> {
    /// Starts a session with empty selection, default view, nothing expanded.
    pub fn new(store: CatalogStore) -> Self {
        let prompts = store
            .prompts()
            .map(|table| PromptResolver::for_index(table, store.index()));
        let session = Self {
            session_id: Uuid::new_v4(),
            store,
            prompts,
            state: ExplorerState::default(),
        };
        debug!(
            "event=explorer_open module=service status=ok session={} items={} prompts={} view={}",
            session.session_id,
            session.store.item_count(),
            session.prompts.as_ref().map_or(0, PromptResolver::len),
            session.state.view.active().as_str()
        );
        session
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn state(&self) -> &ExplorerState<V> {
        &self.state
    }

    /// Applies one event and returns the new state.
    pub fn dispatch(&mut self, event: ExplorerEvent<V>) -> &ExplorerState<V> {
        self.state = reduce(&self.state, &event);
        debug!(
            "event=explorer_dispatch module=service status=ok session={} kind={} selected={} view={} expanded={}",
            self.session_id,
            event.kind(),
            self.state.selection.selected().unwrap_or("-"),
            self.state.view.active().as_str(),
            self.state
                .accordion
                .expanded()
                .map_or_else(|| "-".to_string(), |period| period.to_string())
        );
        &self.state
    }

    pub fn select_item(&mut self, item_id: impl Into<ItemId>) -> &ExplorerState<V> {
        self.dispatch(ExplorerEvent::SelectItem(item_id.into()))
    }

    pub fn set_view(&mut self, view: V) -> &ExplorerState<V> {
        self.dispatch(ExplorerEvent::SetView(view))
    }

    pub fn toggle_period(&mut self, period: Period) -> &ExplorerState<V> {
        self.dispatch(ExplorerEvent::TogglePeriod(period))
    }

    /// Selected item, or `None` when nothing (or an unknown id) is selected.
    pub fn current_item(&self) -> Option<&Item> {
        self.state.selection.current(&self.store)
    }

    pub fn expanded_entry(&self) -> Option<&PlanEntry> {
        self.state.accordion.current(&self.store)
    }

    /// Prompt for the current selection; `None` if the catalog has no table.
    pub fn prompt(&self) -> Option<Prompt<'_>> {
        self.prompts
            .as_ref()
            .map(|resolver| resolver.resolve(self.state.selection.selected()))
    }

    pub fn snapshot(&self) -> ExplorerSnapshot {
        let expanded = self.expanded_entry().cloned();
        let expanded_items = match &expanded {
            Some(entry) => self
                .store
                .items_for_period(entry.period)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        ExplorerSnapshot {
            session_id: self.session_id.to_string(),
            title: self.store.title().to_string(),
            active_view: self.state.view.active().as_str(),
            views: self.state.view.tabs(),
            selected: self.current_item().cloned(),
            expanded,
            expanded_items,
            prompt: self.prompt().map(|prompt| prompt.text().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce, ExplorerEvent, ExplorerState};
    use crate::state::view::ViewSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tab {
        Map,
        Plan,
    }

    impl ViewSet for Tab {
        const ALL: &'static [Self] = &[Self::Map, Self::Plan];

        fn default_view() -> Self {
            Self::Map
        }

        fn as_str(self) -> &'static str {
            match self {
                Self::Map => "map",
                Self::Plan => "plan",
            }
        }

        fn label(self) -> &'static str {
            self.as_str()
        }
    }

    #[test]
    fn reduce_leaves_input_state_untouched() {
        let before = ExplorerState::<Tab>::default();
        let after = reduce(&before, &ExplorerEvent::SelectItem("a".to_string()));

        assert_eq!(before.selection.selected(), None);
        assert_eq!(after.selection.selected(), Some("a"));
    }

    #[test]
    fn each_event_touches_one_slice() {
        let base = ExplorerState::<Tab>::default();

        let selected = reduce(&base, &ExplorerEvent::SelectItem("a".to_string()));
        assert_eq!(selected.view, base.view);
        assert_eq!(selected.accordion, base.accordion);

        let switched = reduce(&selected, &ExplorerEvent::SetView(Tab::Plan));
        assert_eq!(switched.selection, selected.selection);
        assert_eq!(switched.accordion, selected.accordion);

        let toggled = reduce(&switched, &ExplorerEvent::TogglePeriod(2));
        assert_eq!(toggled.selection, switched.selection);
        assert_eq!(toggled.view, switched.view);
    }

    #[test]
    fn parse_view_rejects_unknown_identifier() {
        let event = ExplorerEvent::<Tab>::parse_view("plan").expect("known view parses");
        assert_eq!(event, ExplorerEvent::SetView(Tab::Plan));

        let err = ExplorerEvent::<Tab>::parse_view("timeline").expect_err("unknown view fails");
        assert_eq!(err.to_string(), "unknown view `timeline`; expected map|plan");
    }
}
