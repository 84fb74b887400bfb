//! Interaction state slices.
//!
//! # Responsibility
//! - Hold the only mutable data in the system: which item is selected,
//!   which view is active and which plan period is expanded.
//! - Resolve follow-up prompts from the current selection.
//!
//! # Invariants
//! - Each slice changes only through its own operation.
//! - No slice reads or writes another slice.

pub mod accordion;
pub mod prompt;
pub mod selection;
pub mod view;
