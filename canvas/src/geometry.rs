//! Grid-space ↔ canvas-space conversions and responsive viewport sizing.
//!
//! Grid space has its origin at the bottom-left with y increasing upward;
//! canvas space has its origin at the top-left with y increasing downward.
//! The `rows - 1 - y` inversion in [`cell_center`] is the single
//! authoritative transform — [`point_to_cell`] is its exact algebraic
//! inverse, and no renderer re-derives the rule on its own.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Logical grid dimensions, supplied by the backend or defaulted by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl GridSize {
    #[must_use]
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Dimensions clamped to at least one cell per axis, the form every
    /// renderer divides by.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            cols: self.cols.max(1),
            rows: self.rows.max(1),
        }
    }
}

/// Per-frame cell dimensions in CSS pixels.
///
/// Recomputed on every draw from the current viewport; never cached across
/// frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_w: f64,
    pub cell_h: f64,
}

impl CellMetrics {
    /// Derive cell metrics for a grid filling a CSS-pixel viewport.
    #[must_use]
    pub fn for_viewport(css_w: f64, css_h: f64, grid: GridSize) -> Self {
        let grid = grid.clamped();
        Self {
            cell_w: css_w / f64::from(grid.cols),
            cell_h: css_h / f64::from(grid.rows),
        }
    }

    /// The smaller of the two cell dimensions, the base unit for shape sizes.
    #[must_use]
    pub fn min_dim(&self) -> f64 {
        self.cell_w.min(self.cell_h)
    }
}

/// Square canvas sizing derived from a container's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    /// CSS size of the square canvas, in CSS pixels.
    pub css_size: f64,
    /// Backing-store size in device pixels (both dimensions).
    pub backing_size: u32,
}

/// Compute the square canvas fit for a container of the given CSS size.
///
/// The canvas is forced square at `floor(min(width, height))` CSS pixels,
/// with the backing store scaled by the device pixel ratio for crisp lines.
/// Re-invoke on every layout-affecting resize.
#[must_use]
pub fn square_fit(container_w: f64, container_h: f64, dpr: f64) -> ViewportFit {
    let css_size = container_w.min(container_h).max(0.0).floor();
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let backing_size = (css_size * dpr).floor() as u32;
    ViewportFit { css_size, backing_size }
}

/// Canvas-space bounding box of one grid cell, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Canvas-space bounds of a grid cell.
///
/// This is the one place the bottom-left → top-left row inversion lives;
/// [`cell_center`] and every renderer derive from it. Valid for out-of-range
/// coordinates too: connective renderers probe neighbors one step past the
/// grid edge and simply find no cell there.
#[must_use]
pub fn cell_rect(x: i64, y: i64, grid: GridSize, metrics: CellMetrics) -> CellRect {
    let grid = grid.clamped();
    #[allow(clippy::cast_precision_loss)]
    let (xf, yf) = (x as f64, y as f64);
    let left = xf * metrics.cell_w;
    let top = (f64::from(grid.rows - 1) - yf) * metrics.cell_h;
    CellRect {
        left,
        top,
        right: left + metrics.cell_w,
        bottom: top + metrics.cell_h,
    }
}

/// Pixel center of a grid cell in CSS canvas coordinates.
#[must_use]
pub fn cell_center(x: i64, y: i64, grid: GridSize, metrics: CellMetrics) -> (f64, f64) {
    let rect = cell_rect(x, y, grid, metrics);
    (rect.left + metrics.cell_w * 0.5, rect.top + metrics.cell_h * 0.5)
}

/// Map a CSS-pixel offset within the canvas rect back to a grid cell.
///
/// Exact inverse of [`cell_center`]'s row inversion. Returns `None` when the
/// point falls outside `[0, cols) × [0, rows)` or the rect is degenerate —
/// callers must check for the sentinel before issuing an inspect call.
#[must_use]
pub fn point_to_cell(css_x: f64, css_y: f64, rect_w: f64, rect_h: f64, grid: GridSize) -> Option<(u32, u32)> {
    let grid = grid.clamped();
    let cell_w = rect_w / f64::from(grid.cols);
    let cell_h = rect_h / f64::from(grid.rows);
    if cell_w <= 0.0 || cell_h <= 0.0 {
        return None;
    }

    let col = (css_x / cell_w).floor();
    let row_from_top = (css_y / cell_h).floor();
    let y = f64::from(grid.rows - 1) - row_from_top;

    if col < 0.0 || y < 0.0 || col >= f64::from(grid.cols) || y >= f64::from(grid.rows) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some((col as u32, y as u32))
}
