//! Top-level routed pages.

pub mod setup;
pub mod simulation;
