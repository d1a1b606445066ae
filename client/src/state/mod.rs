//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`sim`, `toast`, `requests`) so individual
//! components can depend on small focused models. Everything here is plain
//! data wrapped in `RwSignal`s by the pages; no module talks to the network.

pub mod requests;
pub mod sim;
pub mod toast;
