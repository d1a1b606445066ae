//! Fallback renderer: plain rectangles for unrecognized cell types.
//!
//! Guarantees the total-coverage invariant — every cell in the snapshot is
//! represented visually exactly once, even when its type has no dedicated
//! renderer. Uses the cell's explicit color when present, else the default
//! accent.

use crate::cell::Cell;
use crate::geometry::{CellMetrics, GridSize, cell_rect};
use crate::surface::Surface;

pub(super) fn draw<S: Surface>(surface: &mut S, cells: &[Cell], grid: GridSize, metrics: CellMetrics) {
    for cell in cells {
        if cell.kind.has_shape_renderer() {
            continue;
        }
        let rect = cell_rect(cell.x, cell.y, grid, metrics);
        surface.set_fill_color(cell.fallback_color());
        surface.fill_rect(
            rect.left.floor(),
            rect.top.floor(),
            metrics.cell_w.ceil(),
            metrics.cell_h.ceil(),
        );
    }
}
