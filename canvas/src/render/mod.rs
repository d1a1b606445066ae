//! Scene compositor: fixed draw order from background to fallback rects.
//!
//! Every call is a full repaint — there is no dirty-region tracking, so the
//! background and grid lines are redrawn each frame and later layers paint
//! over earlier ones at shared boundaries (a seed fully occludes the grid
//! lines beneath it). Draw order per frame:
//!
//! clear → background → grid lines → roots → stems → seeds → leaves →
//! fallback rects.
//!
//! Drawing is a pure function of the cell list and viewport size; it is
//! idempotent and safe to re-invoke with the same snapshot at any time.

mod fallback;
mod leaves;
mod roots;
mod seeds;
mod stems;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

pub use seeds::seed_rotation;

use wasm_bindgen::JsValue;

use crate::adjacency::AdjacencyIndex;
use crate::cell::Cell;
use crate::consts::{CANVAS_BG, GRID_COLOR};
use crate::geometry::{CellMetrics, GridSize};
use crate::surface::Surface;

/// Draw the full scene for one snapshot.
///
/// `css_w` and `css_h` are in CSS pixels; `dpr` is the device pixel ratio.
/// Handles an empty cell list (blank grid) and partial/malformed entries
/// gracefully — renderers skip what they cannot place, never panic.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw_scene<S: Surface>(
    surface: &mut S,
    cells: &[Cell],
    grid: GridSize,
    css_w: f64,
    css_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    let grid = grid.clamped();
    let metrics = CellMetrics::for_viewport(css_w, css_h, grid);

    surface.set_device_transform(dpr)?;
    surface.clear_rect(0.0, 0.0, css_w, css_h);
    surface.set_fill_color(CANVAS_BG);
    surface.fill_rect(0.0, 0.0, css_w, css_h);

    draw_grid_lines(surface, grid, metrics, css_w, css_h);

    // One index per frame; both connective renderers share it.
    let index = AdjacencyIndex::build(cells);

    roots::draw(surface, &index, grid, metrics)?;
    stems::draw(surface, &index, grid, metrics)?;
    seeds::draw(surface, cells, grid, metrics)?;
    leaves::draw(surface, cells, grid, metrics)?;
    fallback::draw(surface, cells, grid, metrics);

    Ok(())
}

/// Faint lines at every column and row boundary, independent of cell data.
fn draw_grid_lines<S: Surface>(surface: &mut S, grid: GridSize, metrics: CellMetrics, css_w: f64, css_h: f64) {
    surface.set_stroke_color(GRID_COLOR);
    surface.set_line_width(1.0);

    for i in 0..=grid.cols {
        // Half-pixel offset keeps 1px lines crisp.
        let x = (f64::from(i) * metrics.cell_w).floor() + 0.5;
        surface.begin_path();
        surface.move_to(x, 0.0);
        surface.line_to(x, css_h);
        surface.stroke();
    }
    for j in 0..=grid.rows {
        let y = (f64::from(j) * metrics.cell_h).floor() + 0.5;
        surface.begin_path();
        surface.move_to(0.0, y);
        surface.line_to(css_w, y);
        surface.stroke();
    }
}
