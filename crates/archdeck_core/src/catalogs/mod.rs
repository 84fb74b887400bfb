//! Built-in catalog instances.
//!
//! # Responsibility
//! - Embed the two shipped datasets and their closed view sets.
//! - Provide a type-erased session for boundaries that pick the catalog by
//!   name at runtime (FFI, CLI).
//!
//! # Invariants
//! - Both instances share one generic `ExplorerSession` implementation; they
//!   differ only in dataset and view set.

pub mod gcp_infra;
pub mod gke_app;

use crate::model::catalog::Item;
use crate::service::command::ExplorerCommand;
use crate::service::explorer::{ExplorerError, ExplorerSession, ExplorerSnapshot};
use crate::store::catalog_store::CatalogStore;
use gcp_infra::InfraView;
use gke_app::AppView;
use uuid::Uuid;

/// Manifest name of the GKE application catalog.
pub const CATALOG_GKE_APP: &str = "gke_app";
/// Manifest name of the GCP infrastructure catalog.
pub const CATALOG_GCP_INFRA: &str = "gcp_infra";

const SUPPORTED_CATALOGS: &[&str] = &[CATALOG_GKE_APP, CATALOG_GCP_INFRA];

/// Returns every built-in catalog name.
pub fn supported_catalogs() -> &'static [&'static str] {
    SUPPORTED_CATALOGS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCatalog {
    GkeApp,
    GcpInfra,
}

impl BuiltinCatalog {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GkeApp => CATALOG_GKE_APP,
            Self::GcpInfra => CATALOG_GCP_INFRA,
        }
    }

    /// Parses a catalog name. Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Result<Self, ExplorerError> {
        match value.trim() {
            CATALOG_GKE_APP => Ok(Self::GkeApp),
            CATALOG_GCP_INFRA => Ok(Self::GcpInfra),
            other => Err(ExplorerError::UnknownCatalog(other.to_string())),
        }
    }

    pub fn load(self) -> Result<CatalogStore, ExplorerError> {
        let store = match self {
            Self::GkeApp => gke_app::load()?,
            Self::GcpInfra => gcp_infra::load()?,
        };
        Ok(store)
    }

    pub fn open(self) -> Result<BuiltinSession, ExplorerError> {
        let store = self.load()?;
        let session = match self {
            Self::GkeApp => BuiltinSession::GkeApp(ExplorerSession::new(store)),
            Self::GcpInfra => BuiltinSession::GcpInfra(ExplorerSession::new(store)),
        };
        Ok(session)
    }
}

/// Session over a catalog chosen at runtime.
#[derive(Debug, Clone)]
pub enum BuiltinSession {
    GkeApp(ExplorerSession<AppView>),
    GcpInfra(ExplorerSession<InfraView>),
}

impl BuiltinSession {
    pub fn catalog(&self) -> BuiltinCatalog {
        match self {
            Self::GkeApp(_) => BuiltinCatalog::GkeApp,
            Self::GcpInfra(_) => BuiltinCatalog::GcpInfra,
        }
    }

    pub fn session_id(&self) -> Uuid {
        match self {
            Self::GkeApp(session) => session.session_id(),
            Self::GcpInfra(session) => session.session_id(),
        }
    }

    /// Applies one untyped command.
    ///
    /// # Errors
    /// - `ExplorerError::UnknownView` for a view outside this catalog's set.
    ///   State is left unchanged in that case.
    pub fn apply(&mut self, command: ExplorerCommand) -> Result<(), ExplorerError> {
        match self {
            Self::GkeApp(session) => {
                session.dispatch(command.into_event()?);
            }
            Self::GcpInfra(session) => {
                session.dispatch(command.into_event()?);
            }
        }
        Ok(())
    }

    pub fn current_item(&self) -> Option<&Item> {
        match self {
            Self::GkeApp(session) => session.current_item(),
            Self::GcpInfra(session) => session.current_item(),
        }
    }

    pub fn snapshot(&self) -> ExplorerSnapshot {
        match self {
            Self::GkeApp(session) => session.snapshot(),
            Self::GcpInfra(session) => session.snapshot(),
        }
    }
}
