//! Catalog loading, validation and lookup.
//!
//! # Responsibility
//! - Turn a raw dataset into a validated, indexed `CatalogStore`.
//! - Keep every configuration check at load time so the UI never sees a
//!   malformed catalog.
//!
//! # Invariants
//! - Item identifiers resolve through a prebuilt index, never a scan.

pub mod catalog_store;
pub mod index;
