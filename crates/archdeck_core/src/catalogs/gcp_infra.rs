//! "FinTech Infrastructure on GCP" catalog.
//!
//! Foundation, network, identity, security, data, GKE and operations layers.
//! Carries a prompt table, so sessions over it always expose a prompt.

use crate::service::explorer::ExplorerSession;
use crate::state::view::ViewSet;
use crate::store::catalog_store::{CatalogResult, CatalogStore};

const DATASET: &str = include_str!("../../data/gcp_infra.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfraView {
    Architecture,
    Plan,
    Flow,
}

impl ViewSet for InfraView {
    const ALL: &'static [Self] = &[Self::Architecture, Self::Plan, Self::Flow];

    fn default_view() -> Self {
        Self::Architecture
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::Plan => "plan",
            Self::Flow => "flow",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Architecture => "Architecture",
            Self::Plan => "4-Week Plan",
            Self::Flow => "Request Flow",
        }
    }
}

pub fn load() -> CatalogResult<CatalogStore> {
    CatalogStore::from_json(DATASET)
}

pub fn open_session() -> CatalogResult<ExplorerSession<InfraView>> {
    load().map(ExplorerSession::new)
}
