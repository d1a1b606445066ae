//! Stem network renderer: fixed-width tubes linking the above-ground plant.
//!
//! Stems connect to adjacent stems, leaves, and seeds (leaves and seeds do
//! not check back — connectivity is asymmetric by type, by design). Unlike
//! roots there is no depth variation and no tip capping.

use wasm_bindgen::JsValue;

use crate::adjacency::{AdjacencyIndex, EDGE_DIRS};
use crate::cell::CellKind;
use crate::consts::{STEM_TUBE_COLOR, STEM_TUBE_WIDTH_FACTOR};
use crate::geometry::{CellMetrics, GridSize, cell_center};
use crate::surface::Surface;

pub(super) fn draw<S: Surface>(
    surface: &mut S,
    index: &AdjacencyIndex,
    grid: GridSize,
    metrics: CellMetrics,
) -> Result<(), JsValue> {
    if index.stems().is_empty() {
        return Ok(());
    }

    surface.save();
    surface.set_round_line_style();
    surface.set_shadow("rgba(0,0,0,0.15)", 2.5);
    surface.set_stroke_color(STEM_TUBE_COLOR);
    surface.set_line_width(metrics.min_dim() * STEM_TUBE_WIDTH_FACTOR);

    for &(x, y) in index.stems() {
        let (cx, cy) = cell_center(x, y, grid, metrics);

        // East and north only, same de-duplication rule as roots.
        for (dx, dy) in EDGE_DIRS {
            if !connectable(index.kind_at(x + dx, y + dy)) {
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
    }

    surface.restore();
    Ok(())
}

/// Kinds a stem tube may attach to.
fn connectable(kind: Option<&CellKind>) -> bool {
    matches!(kind, Some(CellKind::Stem | CellKind::Leaf | CellKind::Seed))
}
