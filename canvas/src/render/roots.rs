//! Root network renderer: curved tubes with depth-based taper and tip caps.
//!
//! Roots read as underground tubing: adjacent root cells are joined by
//! quadratic curves bowing through the axis-aligned midpoint, widths and
//! opacity taper with depth, and dead-end tips get a rounded cap.

use wasm_bindgen::JsValue;

use crate::adjacency::{AdjacencyIndex, EDGE_DIRS};
use crate::cell::CellKind;
use crate::consts::{ROOT_TIP_CAP_FACTOR, ROOT_TUBE_RGB, ROOT_TUBE_WIDTH_FACTOR};
use crate::geometry::{CellMetrics, GridSize, cell_center};
use crate::surface::Surface;

pub(super) fn draw<S: Surface>(
    surface: &mut S,
    index: &AdjacencyIndex,
    grid: GridSize,
    metrics: CellMetrics,
) -> Result<(), JsValue> {
    if index.roots().is_empty() {
        return Ok(());
    }

    surface.save();
    surface.set_round_line_style();
    surface.set_shadow("rgba(0,0,0,0.18)", 3.0);

    for &(x, y) in index.roots() {
        let (cx, cy) = cell_center(x, y, grid, metrics);
        let depth = depth_of(y, grid);
        let tube_w = tube_width(depth, metrics);
        let color = tube_color(depth);

        surface.set_stroke_color(&color);
        surface.set_line_width(tube_w);

        // East and north only: each undirected edge is drawn exactly once.
        for (dx, dy) in EDGE_DIRS {
            if !index.is_kind(x + dx, y + dy, &CellKind::Root) {
                continue;
            }
            let (ncx, ncy) = cell_center(x + dx, y + dy, grid, metrics);
            surface.begin_path();
            surface.move_to(cx, cy);
            if dx != 0 {
                surface.quadratic_curve_to((cx + ncx) / 2.0, cy, ncx, ncy);
            } else {
                surface.quadratic_curve_to(cx, (cy + ncy) / 2.0, ncx, ncy);
            }
            surface.stroke();
        }

        // Rounded cap on dead-end tips. Degree counts all four directions;
        // an isolated root (degree 0) draws no edges and no cap.
        if index.degree(x, y, &CellKind::Root) == 1 {
            surface.begin_path();
            surface.set_fill_color(&color);
            surface.arc(cx, cy, tube_w * ROOT_TIP_CAP_FACTOR)?;
            surface.fill();
        }
    }

    surface.restore();
    Ok(())
}

/// Depth of a root cell: 0 at the top row, 1 at the bottom (`y == 0`).
///
/// Tubes get thinner and more transparent as depth grows — a stylistic
/// choice, not simulation output.
pub(super) fn depth_of(y: i64, grid: GridSize) -> f64 {
    let grid = grid.clamped();
    if grid.rows > 1 {
        #[allow(clippy::cast_precision_loss)]
        let yf = y as f64;
        1.0 - yf / f64::from(grid.rows - 1)
    } else {
        0.0
    }
}

pub(super) fn tube_width(depth: f64, metrics: CellMetrics) -> f64 {
    metrics.min_dim() * (0.75 - 0.35 * depth) * ROOT_TUBE_WIDTH_FACTOR
}

pub(super) fn tube_color(depth: f64) -> String {
    let alpha = 0.95 - 0.35 * depth;
    let (r, g, b) = ROOT_TUBE_RGB;
    format!("rgba({r}, {g}, {b}, {alpha:.3})")
}
