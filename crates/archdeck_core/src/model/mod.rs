//! Catalog data model shared by every view.
//!
//! # Responsibility
//! - Define the groups, items, services, plan entries and prompt tables a
//!   catalog dataset is made of.
//!
//! # Invariants
//! - Everything in here is immutable configuration once loaded.
//! - Item identifiers are globally unique within a catalog.

pub mod catalog;
