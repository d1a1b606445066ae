//! Canvas rendering engine for the genome simulation viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It turns a
//! sparse, typed grid of cells — one snapshot of a plant-like organism served
//! by the simulation backend — into an organic-looking 2D scene: connected
//! root and stem tubing, rotated seed ellipses, leaf bodies with radiating
//! fronds. The host UI layer is responsible only for fetching snapshots,
//! sizing the container, and forwarding clicks.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`cell`] | Canonical cell type, kind tags, display colors |
//! | [`geometry`] | Grid-space ↔ canvas-space conversions and viewport fit |
//! | [`adjacency`] | Per-frame neighbor index for connective renderers |
//! | [`snapshot`] | Backend payload shapes and normalization |
//! | [`surface`] | Drawing seam over `CanvasRenderingContext2d` |
//! | [`render`] | Scene compositor and per-kind shape renderers |
//! | [`engine`] | Browser-facing engine bound to an `HtmlCanvasElement` |
//! | [`consts`] | Shared colors and shape factors |

pub mod adjacency;
pub mod cell;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod render;
pub mod snapshot;
pub mod surface;
