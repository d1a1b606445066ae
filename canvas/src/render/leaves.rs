//! Leaf renderer: an elliptical body with four tapered fronds.
//!
//! Purely decorative geometry — each leaf cell is drawn independently of
//! its neighbors. The body is a gradient ellipse; the fronds are closed
//! blade shapes bulging toward each cell corner (tips inset 90% of the way
//! so the result reads as foliage rather than a star), each capped with a
//! small gradient highlight.

use wasm_bindgen::JsValue;

use crate::cell::{Cell, CellKind};
use crate::consts::{FROND_BASE_FACTOR, FROND_TIP_INSET};
use crate::geometry::{CellMetrics, GridSize, cell_rect};
use crate::surface::Surface;

pub(super) fn draw<S: Surface>(
    surface: &mut S,
    cells: &[Cell],
    grid: GridSize,
    metrics: CellMetrics,
) -> Result<(), JsValue> {
    let leaves: Vec<&Cell> = cells.iter().filter(|c| c.kind == CellKind::Leaf).collect();
    if leaves.is_empty() {
        return Ok(());
    }

    let min_dim = metrics.min_dim();

    surface.save();
    surface.set_shadow("rgba(0,0,0,0.12)", 2.0);

    for leaf in leaves {
        let rect = cell_rect(leaf.x, leaf.y, grid, metrics);
        let cx = rect.left + metrics.cell_w * 0.5;
        let cy = rect.top + metrics.cell_h * 0.5;

        // Central body gives the leaf mass.
        let body_rx = min_dim * 0.24;
        let body_ry = min_dim * 0.18;
        surface.set_fill_linear_gradient(
            cx - body_rx,
            cy,
            cx + body_rx,
            cy,
            &[(0.0, "#14532d"), (0.5, "#22c55e"), (1.0, "#86efac")],
        )?;
        surface.begin_path();
        surface.ellipse(cx, cy, body_rx, body_ry, 0.0)?;
        surface.fill();
        surface.set_line_width((min_dim * 0.025).max(1.0));
        surface.set_stroke_color("rgba(22,101,52,0.35)");
        surface.stroke();

        // Four fronds toward the cell corners.
        for (tx, ty) in [
            (rect.left, rect.top),
            (rect.right, rect.top),
            (rect.right, rect.bottom),
            (rect.left, rect.bottom),
        ] {
            frond(surface, cx, cy, tx, ty, min_dim)?;
        }

        // Soft highlight on the body.
        surface.begin_path();
        surface.ellipse(
            cx + body_rx * 0.15,
            cy - body_ry * 0.35,
            body_rx * 0.35,
            body_ry * 0.45,
            0.0,
        )?;
        surface.set_fill_color("rgba(255,255,255,0.08)");
        surface.fill();
    }

    surface.restore();
    Ok(())
}

/// One tapered blade from the leaf center toward a corner.
#[allow(clippy::many_single_char_names, clippy::similar_names)]
fn frond<S: Surface>(surface: &mut S, cx: f64, cy: f64, tx: f64, ty: f64, min_dim: f64) -> Result<(), JsValue> {
    // Inset the tip to avoid sharp star-like points.
    let ix = cx + (tx - cx) * FROND_TIP_INSET;
    let iy = cy + (ty - cy) * FROND_TIP_INSET;

    let vx = ix - cx;
    let vy = iy - cy;
    let hyp = vx.hypot(vy);
    let len = if hyp == 0.0 { 1.0 } else { hyp };
    let ux = vx / len;
    let uy = vy / len;
    // Perpendicular to the direction of travel.
    let px = -uy;
    let py = ux;

    let half = min_dim * FROND_BASE_FACTOR * 0.5;

    let ax = cx + px * half;
    let ay = cy + py * half;
    let bx2 = cx - px * half;
    let by2 = cy - py * half;

    // Base darker, tip lighter.
    surface.set_fill_linear_gradient(
        cx,
        cy,
        ix,
        iy,
        &[(0.0, "#166534"), (0.6, "#16a34a"), (1.0, "#86efac")],
    )?;

    surface.begin_path();
    surface.move_to(ax, ay);
    // Belly bulge: control points 45% toward the tip, offset laterally.
    let c1x = cx + ux * (len * 0.45) + px * (half * 0.55);
    let c1y = cy + uy * (len * 0.45) + py * (half * 0.55);
    surface.quadratic_curve_to(c1x, c1y, ix, iy);
    surface.line_to(bx2, by2);
    let c2x = cx + ux * (len * 0.45) - px * (half * 0.55);
    let c2y = cy + uy * (len * 0.45) - py * (half * 0.55);
    surface.quadratic_curve_to(c2x, c2y, ax, ay);
    surface.close_path();
    surface.fill();

    // Rounded tip cap softens the point.
    let tip_r = (min_dim * 0.07).max(1.5);
    surface.set_fill_radial_gradient(
        ix,
        iy,
        0.0,
        ix,
        iy,
        tip_r,
        &[(0.0, "#bbf7d0"), (1.0, "#16a34a")],
    )?;
    surface.begin_path();
    surface.arc(ix, iy, tip_r)?;
    surface.fill();

    surface.set_line_width((min_dim * 0.02).max(1.0));
    surface.set_stroke_color("rgba(22,101,52,0.35)");
    surface.stroke();

    Ok(())
}
