//! Core domain logic for the architecture catalog explorer.
//! This crate is the single source of truth for catalog invariants and
//! interaction state.

pub mod catalogs;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod store;

pub use catalogs::gcp_infra::InfraView;
pub use catalogs::gke_app::AppView;
pub use catalogs::{supported_catalogs, BuiltinCatalog, BuiltinSession};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::catalog::{
    Catalog, ComparisonRow, Group, GroupId, Item, ItemId, Period, PlanEntry, PromptTable,
    ServiceRecord,
};
pub use service::command::ExplorerCommand;
pub use service::explorer::{
    reduce, ExplorerError, ExplorerEvent, ExplorerSession, ExplorerSnapshot, ExplorerState,
};
pub use state::accordion::AccordionState;
pub use state::prompt::{Prompt, PromptResolver};
pub use state::selection::SelectionState;
pub use state::view::{ViewSet, ViewState, ViewTab};
pub use store::catalog_store::{CatalogError, CatalogResult, CatalogStore, UnresolvedDependency};
pub use store::index::CatalogIndex;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
