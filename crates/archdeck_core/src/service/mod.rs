//! Session-level use cases.
//!
//! # Responsibility
//! - Tie the catalog store and the state slices into one explorer session.
//! - Keep UI/FFI layers decoupled from state-slice details.

pub mod command;
pub mod explorer;
