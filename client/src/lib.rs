//! # gstep-ui
//!
//! Leptos + WASM front end for the genome simulation backend. A setup page
//! submits a genome plus an ecosystem configuration to create a world; the
//! simulation page polls world state and hands the normalized cell list to
//! the `canvas` crate for imperative rendering via the `CanvasHost` bridge
//! component.
//!
//! Everything network-facing lives behind the `csr` feature so the crate
//! compiles (and its state/util tests run) on native targets.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
