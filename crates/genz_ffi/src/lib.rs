//! Flutter-facing bindings over `genz_core`.

pub mod api;
