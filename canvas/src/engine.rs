//! Browser-facing engine: binds the pure rendering core to an
//! `HtmlCanvasElement`.
//!
//! The host UI owns the container layout and the snapshot lifecycle; the
//! engine only reads current sizes at draw time. All geometry and scene
//! logic lives in [`crate::geometry`] and [`crate::render`] so it stays
//! testable off-browser — this module is thin WASM glue.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::cell::Cell;
use crate::geometry::{self, GridSize, ViewportFit};
use crate::render;
use crate::surface::Canvas2d;

/// Rendering engine bound to one canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
}

impl Engine {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    /// Fit the canvas to its container: square CSS size, DPR-scaled backing
    /// store. Re-invoke on every layout-affecting resize.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas CSS size cannot be updated.
    pub fn sync_size(&self, container: &Element) -> Result<ViewportFit, JsValue> {
        let rect = container.get_bounding_client_rect();
        let fit = geometry::square_fit(rect.width(), rect.height(), device_pixel_ratio());

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", fit.css_size))?;
        style.set_property("height", &format!("{}px", fit.css_size))?;
        self.canvas.set_width(fit.backing_size);
        self.canvas.set_height(fit.backing_size);

        Ok(fit)
    }

    /// Draw one snapshot. A full repaint every time; safe to re-invoke with
    /// the same cells at any point.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self, cells: &[Cell], grid: GridSize) -> Result<(), JsValue> {
        let ctx = self.context_2d()?;
        let dpr = device_pixel_ratio();
        let css_w = f64::from(self.canvas.width()) / dpr;
        let css_h = f64::from(self.canvas.height()) / dpr;

        let mut surface = Canvas2d::new(ctx);
        render::draw_scene(&mut surface, cells, grid, css_w, css_h, dpr)
    }

    /// Grid cell under a client-space pointer position, or `None` when the
    /// point is outside the grid or the canvas has no size yet.
    #[must_use]
    pub fn cell_at(&self, client_x: f64, client_y: f64, grid: GridSize) -> Option<(u32, u32)> {
        let rect = self.canvas.get_bounding_client_rect();
        geometry::point_to_cell(
            client_x - rect.left(),
            client_y - rect.top(),
            rect.width(),
            rect.height(),
            grid,
        )
    }

    fn context_2d(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?;
        ctx.dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected canvas context type"))
    }
}

/// Device pixel ratio with a sane fallback outside a window context.
fn device_pixel_ratio() -> f64 {
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}
