//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the explorer session to the hosting UI via FRB.
//! - Translate untyped UI input into typed explorer events.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - At most one explorer session exists per process; `explorer_open`
//!   replaces it.
//! - A rejected call leaves the session state unchanged.

use archdeck_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BuiltinCatalog, BuiltinSession, ExplorerCommand, ExplorerError,
};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

static SESSION: Mutex<Option<BuiltinSession>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Response envelope for every explorer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerResponse {
    /// Whether the call was applied.
    pub ok: bool,
    /// JSON-encoded `ExplorerSnapshot` of the current session, when one exists.
    pub snapshot_json: Option<String>,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
}

impl ExplorerResponse {
    fn from_session(session: &BuiltinSession) -> Self {
        match serde_json::to_string(&session.snapshot()) {
            Ok(json) => Self {
                ok: true,
                snapshot_json: Some(json),
                message: String::new(),
            },
            Err(err) => Self::failure(format!("snapshot encoding failed: {err}")),
        }
    }

    fn rejected(session: &BuiltinSession, err: &ExplorerError) -> Self {
        let mut response = Self::from_session(session);
        response.ok = false;
        response.message = err.to_string();
        response
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            snapshot_json: None,
            message: message.into(),
        }
    }
}

/// Opens a fresh session over a built-in catalog (`gke_app|gcp_infra`).
///
/// # FFI contract
/// - Replaces any existing session.
/// - Unknown catalog names and invalid datasets return `ok=false` and keep
///   the previous session.
#[flutter_rust_bridge::frb(sync)]
pub fn explorer_open(catalog: String) -> ExplorerResponse {
    let opened = BuiltinCatalog::parse(catalog.as_str()).and_then(BuiltinCatalog::open);
    let session = match opened {
        Ok(session) => session,
        Err(err) => {
            warn!(
                "event=ffi_explorer_open module=ffi status=error catalog={} error={}",
                catalog.trim(),
                err
            );
            return ExplorerResponse::failure(format!("explorer_open failed: {err}"));
        }
    };

    info!(
        "event=ffi_explorer_open module=ffi status=ok catalog={} session={}",
        session.catalog().as_str(),
        session.session_id()
    );
    let mut slot = lock_session();
    let response = ExplorerResponse::from_session(&session);
    *slot = Some(session);
    response
}

/// Toggle-selects one item by identifier.
#[flutter_rust_bridge::frb(sync)]
pub fn explorer_select(item_id: String) -> ExplorerResponse {
    apply_command(ExplorerCommand::Select(item_id.trim().to_string()))
}

/// Switches the active view. Unknown view ids are rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn explorer_set_view(view: String) -> ExplorerResponse {
    apply_command(ExplorerCommand::View(view.trim().to_string()))
}

/// Expands or collapses one plan period.
#[flutter_rust_bridge::frb(sync)]
pub fn explorer_toggle_period(period: u32) -> ExplorerResponse {
    apply_command(ExplorerCommand::Toggle(period))
}

/// Returns the current projection without changing state.
#[flutter_rust_bridge::frb(sync)]
pub fn explorer_snapshot() -> ExplorerResponse {
    match lock_session().as_ref() {
        Some(session) => ExplorerResponse::from_session(session),
        None => ExplorerResponse::failure(NO_SESSION_MESSAGE),
    }
}

const NO_SESSION_MESSAGE: &str = "no explorer session; call explorer_open first";

fn apply_command(command: ExplorerCommand) -> ExplorerResponse {
    let mut slot = lock_session();
    let Some(session) = slot.as_mut() else {
        return ExplorerResponse::failure(NO_SESSION_MESSAGE);
    };

    let label = command.to_string();
    match session.apply(command) {
        Ok(()) => ExplorerResponse::from_session(session),
        Err(err) => {
            warn!(
                "event=ffi_explorer_command module=ffi status=rejected command={} error={}",
                label, err
            );
            ExplorerResponse::rejected(session, &err)
        }
    }
}

fn lock_session() -> MutexGuard<'static, Option<BuiltinSession>> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}
