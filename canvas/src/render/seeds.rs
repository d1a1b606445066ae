//! Seed renderer: rotated gradient ellipses with a glossy highlight.

use wasm_bindgen::JsValue;

use crate::cell::{Cell, CellKind};
use crate::consts::{SEED_RX_FACTOR, SEED_RY_FACTOR};
use crate::geometry::{CellMetrics, GridSize, cell_center};
use crate::surface::Surface;

pub(super) fn draw<S: Surface>(
    surface: &mut S,
    cells: &[Cell],
    grid: GridSize,
    metrics: CellMetrics,
) -> Result<(), JsValue> {
    let seeds: Vec<&Cell> = cells.iter().filter(|c| c.kind == CellKind::Seed).collect();
    if seeds.is_empty() {
        return Ok(());
    }

    let min_dim = metrics.min_dim();
    let rx = min_dim * SEED_RX_FACTOR;
    let ry = min_dim * SEED_RY_FACTOR;

    surface.save();
    for seed in seeds {
        let (cx, cy) = cell_center(seed.x, seed.y, grid, metrics);

        surface.save();
        surface.translate(cx, cy)?;
        surface.rotate(seed_rotation(seed.x, seed.y))?;

        // Body: dark brown core fading to a darker edge.
        surface.set_fill_radial_gradient(
            0.0,
            0.0,
            ry * 0.2,
            0.0,
            0.0,
            rx.max(ry),
            &[(0.0, "#7a4a26"), (0.65, "#5b3a1e"), (1.0, "#4a2e19")],
        )?;
        surface.begin_path();
        surface.ellipse(0.0, 0.0, rx, ry, 0.0)?;
        surface.fill();

        // Subtle outline.
        surface.set_line_width((min_dim * 0.04).max(1.0));
        surface.set_stroke_color("rgba(0,0,0,0.25)");
        surface.stroke();

        // Offset highlight suggests glossy curvature.
        surface.begin_path();
        surface.ellipse(-rx * 0.25, -ry * 0.25, rx * 0.18, ry * 0.12, 0.0)?;
        surface.set_fill_color("rgba(255,255,255,0.18)");
        surface.fill();

        surface.restore();
    }
    surface.restore();

    Ok(())
}

/// Deterministic rotation for a seed at `(x, y)`, in radians within ±10°.
///
/// A pure function of the coordinates, so identical seeds render with the
/// same tilt across redraws. The hash reproduces JS int32 multiply/xor
/// semantics: `((x*73856093) ^ (y*19349663)) >>> 0`.
#[must_use]
pub fn seed_rotation(x: i64, y: i64) -> f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    let hash = ((x as i32).wrapping_mul(73_856_093) as u32) ^ ((y as i32).wrapping_mul(19_349_663) as u32);
    #[allow(clippy::cast_possible_wrap)]
    let degrees = (hash % 21) as i32 - 10;
    f64::from(degrees) * (std::f64::consts::PI / 180.0)
}
