//! Network layer: wire types and the typed API client.

pub mod api;
pub mod types;
