//! "Application Architecture Inside GKE" catalog.
//!
//! Nine layers from container images to observability, a service map, a
//! four-week plan and an infra-vs-application comparison. No prompt table.

use crate::service::explorer::ExplorerSession;
use crate::state::view::ViewSet;
use crate::store::catalog_store::{CatalogResult, CatalogStore};

const DATASET: &str = include_str!("../../data/gke_app.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppView {
    Architecture,
    Services,
    Roadmap,
    Comparison,
}

impl ViewSet for AppView {
    const ALL: &'static [Self] = &[
        Self::Architecture,
        Self::Services,
        Self::Roadmap,
        Self::Comparison,
    ];

    fn default_view() -> Self {
        Self::Architecture
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Services => "services",
            Self::Roadmap => "roadmap",
            Self::Comparison => "comparison",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Architecture => "Architecture",
            Self::Services => "Service Map",
            Self::Roadmap => "4-Week Plan",
            Self::Comparison => "P1 vs P2",
        }
    }
}

/// Loads and validates the embedded dataset.
pub fn load() -> CatalogResult<CatalogStore> {
    CatalogStore::from_json(DATASET)
}

pub fn open_session() -> CatalogResult<ExplorerSession<AppView>> {
    load().map(ExplorerSession::new)
}
