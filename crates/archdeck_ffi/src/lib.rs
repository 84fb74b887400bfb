//! Flutter-facing bindings for the architecture catalog explorer.

pub mod api;
