use super::roots;
use super::*;
use crate::cell::{Cell, CellKind};
use crate::consts::{CANVAS_BG, DEFAULT_ACCENT, GRID_COLOR, STEM_TUBE_COLOR};
use crate::surface::recording::{Op, RecordingSurface};

fn cell(x: i64, y: i64, kind: CellKind) -> Cell {
    Cell::new(x, y, kind)
}

fn draw(cells: &[Cell], grid: GridSize, css_w: f64, css_h: f64) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    draw_scene(&mut surface, cells, grid, css_w, css_h, 1.0).expect("recording surface never fails");
    surface
}

fn root_strokes(surface: &RecordingSurface) -> Vec<(String, f64)> {
    surface
        .strokes()
        .into_iter()
        .filter(|(color, _)| color.starts_with("rgba(245"))
        .collect()
}

#[test]
fn empty_grid_paints_background_and_lines_only() {
    let mut surface = RecordingSurface::new();
    draw_scene(&mut surface, &[], GridSize::new(4, 4), 400.0, 400.0, 2.0)
        .expect("recording surface never fails");

    assert_eq!(surface.ops[0], Op::DeviceTransform(2.0));
    assert_eq!(surface.ops[1], Op::ClearRect(0.0, 0.0, 400.0, 400.0));

    let rects = surface.fill_rects();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0], (0.0, 0.0, 400.0, 400.0, CANVAS_BG.to_owned()));

    // Five column lines plus five row lines, nothing else strokes.
    let strokes = surface.strokes();
    assert_eq!(strokes.len(), 10);
    assert!(strokes.iter().all(|(color, width)| color == GRID_COLOR && *width == 1.0));

    assert_eq!(surface.count(|op| matches!(op, Op::Arc { .. } | Op::Ellipse { .. })), 0);
}

#[test]
fn grid_lines_sit_on_half_pixel_offsets() {
    let surface = draw(&[], GridSize::new(3, 3), 100.0, 100.0);
    let crisp = surface.count(|op| match op {
        Op::MoveTo(x, y) => x.fract() == 0.5 || y.fract() == 0.5,
        _ => false,
    });
    // Every grid line starts on a half-pixel boundary.
    assert_eq!(crisp, 8);
}

#[test]
fn adjacent_roots_draw_one_edge_and_two_tip_caps() {
    let cells = [cell(0, 0, CellKind::Root), cell(1, 0, CellKind::Root)];
    let surface = draw(&cells, GridSize::new(2, 1), 200.0, 100.0);

    // One undirected edge between the pair, painted once.
    let edges = root_strokes(&surface);
    assert_eq!(edges.len(), 1);
    // Single row, so depth is 0 and opacity is at its maximum.
    assert_eq!(edges[0].0, "rgba(245, 158, 11, 0.950)");

    // Both ends are degree-1 tips and get a rounded cap at tube scale.
    let expected_radius = 100.0 * 0.75 * 0.55 * 0.42;
    let caps: Vec<f64> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Arc { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(caps.len(), 2);
    for radius in caps {
        assert!((radius - expected_radius).abs() < 1e-9);
    }
}

#[test]
fn isolated_root_draws_no_edges_and_no_cap() {
    let cells = [cell(1, 1, CellKind::Root)];
    let surface = draw(&cells, GridSize::new(3, 3), 300.0, 300.0);

    assert!(root_strokes(&surface).is_empty());
    assert_eq!(surface.count(|op| matches!(op, Op::Arc { .. })), 0);
}

#[test]
fn root_edges_are_painted_exactly_once() {
    // Full 2×2 block: four undirected edges, every cell degree 2.
    let cells = [
        cell(0, 0, CellKind::Root),
        cell(1, 0, CellKind::Root),
        cell(0, 1, CellKind::Root),
        cell(1, 1, CellKind::Root),
    ];
    let surface = draw(&cells, GridSize::new(2, 2), 200.0, 200.0);

    assert_eq!(root_strokes(&surface).len(), 4);
    assert_eq!(surface.count(|op| matches!(op, Op::Arc { .. })), 0);
}

#[test]
fn root_depth_tapers_width_and_opacity() {
    let grid = GridSize::new(1, 5);
    let metrics = CellMetrics::for_viewport(100.0, 500.0, grid);

    // y == 0 is the bottom row, the deepest point.
    assert!((roots::depth_of(0, grid) - 1.0).abs() < 1e-12);
    assert!((roots::depth_of(4, grid)).abs() < 1e-12);

    let deep = roots::tube_width(1.0, metrics);
    let shallow = roots::tube_width(0.0, metrics);
    assert!(deep < shallow);

    assert_eq!(roots::tube_color(0.0), "rgba(245, 158, 11, 0.950)");
    assert_eq!(roots::tube_color(1.0), "rgba(245, 158, 11, 0.600)");
}

#[test]
fn single_row_grid_has_zero_depth() {
    assert!((roots::depth_of(0, GridSize::new(5, 1))).abs() < 1e-12);
}

#[test]
fn stems_connect_to_stems_leaves_and_seeds() {
    let cells = [
        cell(0, 0, CellKind::Stem),
        cell(1, 0, CellKind::Leaf),
        cell(0, 1, CellKind::Seed),
    ];
    let surface = draw(&cells, GridSize::new(2, 2), 200.0, 200.0);

    let stem_edges: Vec<(String, f64)> = surface
        .strokes()
        .into_iter()
        .filter(|(color, _)| color == STEM_TUBE_COLOR)
        .collect();
    assert_eq!(stem_edges.len(), 2);
    // Fixed width: no depth taper above ground.
    for (_, width) in stem_edges {
        assert!((width - 45.0).abs() < 1e-9);
    }
}

#[test]
fn stems_ignore_roots_and_unknown_kinds() {
    let cells = [
        cell(0, 0, CellKind::Stem),
        cell(1, 0, CellKind::Root),
        cell(0, 1, CellKind::Other("rock".to_owned())),
    ];
    let surface = draw(&cells, GridSize::new(2, 2), 200.0, 200.0);

    let stem_edges = surface
        .strokes()
        .into_iter()
        .filter(|(color, _)| color == STEM_TUBE_COLOR)
        .count();
    assert_eq!(stem_edges, 0);
}

#[test]
fn seed_tilt_is_a_pure_function_of_coordinates() {
    let cells = [cell(0, 0, CellKind::Seed), cell(2, 1, CellKind::Seed)];
    let first = draw(&cells, GridSize::new(3, 3), 300.0, 300.0);
    let second = draw(&cells, GridSize::new(3, 3), 300.0, 300.0);
    assert_eq!(first.ops, second.ops);
}

#[test]
fn seed_rotation_stays_within_ten_degrees() {
    let limit = 10.0_f64.to_radians() + 1e-12;
    for x in -3_i64..8 {
        for y in -3_i64..8 {
            let rot = seed_rotation(x, y);
            assert!(rot.abs() <= limit, "rotation {rot} out of range at ({x}, {y})");
        }
    }
    // Hash of the origin is zero, which lands on the lower bound.
    assert!((seed_rotation(0, 0) + 10.0_f64.to_radians()).abs() < 1e-12);
}

#[test]
fn unknown_kinds_fall_back_to_snapped_rects() {
    let cells = [cell(0, 0, CellKind::Other("rock".to_owned()))];
    let surface = draw(&cells, GridSize::new(2, 2), 200.0, 200.0);

    let rects: Vec<_> = surface
        .fill_rects()
        .into_iter()
        .filter(|(_, _, _, _, color)| color != CANVAS_BG)
        .collect();
    assert_eq!(rects.len(), 1);
    // Bottom-left grid cell lands in the lower canvas half, pixel-snapped.
    assert_eq!(rects[0], (0.0, 100.0, 100.0, 100.0, DEFAULT_ACCENT.to_owned()));
}

#[test]
fn fallback_rect_uses_explicit_wire_color() {
    let mut rock = cell(1, 1, CellKind::Other("rock".to_owned()));
    rock.color = Some("#ff0000".to_owned());
    let surface = draw(&[rock], GridSize::new(2, 2), 200.0, 200.0);

    let rects: Vec<_> = surface
        .fill_rects()
        .into_iter()
        .filter(|(_, _, _, _, color)| color != CANVAS_BG)
        .collect();
    assert_eq!(rects[0].4, "#ff0000");
}

#[test]
fn mixed_scene_covers_every_cell_once() {
    let cells = [
        cell(0, 0, CellKind::Root),
        cell(1, 0, CellKind::Root),
        cell(0, 3, CellKind::Seed),
        cell(2, 3, CellKind::Seed),
        cell(3, 3, CellKind::Leaf),
        cell(3, 0, CellKind::Other("rock".to_owned())),
    ];
    let surface = draw(&cells, GridSize::new(4, 4), 400.0, 400.0);

    // Two ellipses per seed (body + highlight) and two per leaf.
    assert_eq!(surface.count(|op| matches!(op, Op::Ellipse { .. })), 6);
    // Four frond tip caps on the leaf plus two root tip caps.
    assert_eq!(surface.count(|op| matches!(op, Op::Arc { .. })), 6);
    // Background plus exactly one fallback rect.
    assert_eq!(surface.fill_rects().len(), 2);
}

#[test]
fn root_taper_widens_monotonically_toward_the_surface() {
    // A vertical root chain from the bottom row up. Edges are emitted
    // bottom-first, so stroke widths must strictly increase as the
    // tubes climb out of the deep rows.
    let chain: Vec<Cell> = (0..5).map(|y| cell(0, y, CellKind::Root)).collect();
    let surface = draw(&chain, GridSize::new(1, 5), 100.0, 500.0);

    let widths: Vec<f64> = root_strokes(&surface).into_iter().map(|(_, w)| w).collect();
    assert_eq!(widths.len(), 4);
    assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn out_of_range_cells_render_without_panicking() {
    let cells = [
        cell(-3, -2, CellKind::Root),
        cell(-3, -1, CellKind::Root),
        cell(99, 120, CellKind::Seed),
        cell(7, -40, CellKind::Leaf),
        cell(-1, 3, CellKind::Stem),
        cell(500, 500, CellKind::Other("rock".to_owned())),
    ];
    let surface = draw(&cells, GridSize::new(4, 4), 400.0, 400.0);

    // Every cell still paints; the canvas clips whatever falls outside.
    assert!(surface.count(|op| matches!(op, Op::Ellipse { .. })) >= 4);
    assert_eq!(root_strokes(&surface).len(), 1);
}
