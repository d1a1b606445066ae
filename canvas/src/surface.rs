//! Drawing seam between the renderers and the browser canvas.
//!
//! Every pixel this crate produces flows through the [`Surface`] trait. The
//! production implementation, [`Canvas2d`], forwards to
//! [`web_sys::CanvasRenderingContext2d`]; tests substitute a recording
//! surface (see `recording` below) so renderer behavior — edge counts,
//! coverage, determinism — is assertable without a browser.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// 2D drawing operations the scene renderers require.
///
/// The surface is stateful in the Canvas2D style: fill/stroke styles, line
/// width, and shadows persist until changed or until a `restore` pops them.
pub trait Surface {
    /// Reset the transform to a device-pixel-ratio scale.
    fn set_device_transform(&mut self, dpr: f64) -> Result<(), JsValue>;
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    /// Round line caps and joins, the organic-tubing stroke style.
    fn set_round_line_style(&mut self);
    fn set_shadow(&mut self, color: &str, blur: f64);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue>;
    fn rotate(&mut self, radians: f64) -> Result<(), JsValue>;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    /// Full circle at `(x, y)`.
    fn arc(&mut self, x: f64, y: f64, radius: f64) -> Result<(), JsValue>;
    /// Full axis-rotated ellipse at `(x, y)`.
    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64) -> Result<(), JsValue>;
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Set the fill style to a linear gradient through the given color stops.
    fn set_fill_linear_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: &[(f64, &str)],
    ) -> Result<(), JsValue>;

    /// Set the fill style to a radial gradient through the given color stops.
    #[allow(clippy::too_many_arguments)]
    fn set_fill_radial_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
        stops: &[(f64, &str)],
    ) -> Result<(), JsValue>;
}

/// Production surface over a browser 2D context.
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2d {
    fn set_device_transform(&mut self, dpr: f64) -> Result<(), JsValue> {
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_round_line_style(&mut self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }

    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.translate(x, y)
    }

    fn rotate(&mut self, radians: f64) -> Result<(), JsValue> {
        self.ctx.rotate(radians)
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.ctx.quadratic_curve_to(cpx, cpy, x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
        self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU)
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64) -> Result<(), JsValue> {
        self.ctx
            .ellipse(x, y, rx, ry, rotation, 0.0, std::f64::consts::TAU)
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill_linear_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: &[(f64, &str)],
    ) -> Result<(), JsValue> {
        let gradient = self.ctx.create_linear_gradient(x0, y0, x1, y1);
        for (offset, color) in stops {
            #[allow(clippy::cast_possible_truncation)]
            gradient.add_color_stop(*offset as f32, color)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        Ok(())
    }

    fn set_fill_radial_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
        stops: &[(f64, &str)],
    ) -> Result<(), JsValue> {
        let gradient = self.ctx.create_radial_gradient(x0, y0, r0, x1, y1, r1)?;
        for (offset, color) in stops {
            #[allow(clippy::cast_possible_truncation)]
            gradient.add_color_stop(*offset as f32, color)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        Ok(())
    }
}
