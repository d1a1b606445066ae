//! Shared colors and shape factors for the canvas crate.

// ── Scene ───────────────────────────────────────────────────────

/// Canvas background fill.
pub const CANVAS_BG: &str = "#d9e3f0";

/// Grid line stroke at every column/row boundary.
pub const GRID_COLOR: &str = "rgba(0,0,0,0.06)";

/// Fill for cells whose type has no dedicated renderer or color override.
pub const DEFAULT_ACCENT: &str = "#38bdf8";

// ── Display colors per kind ─────────────────────────────────────

/// Seed body color (dark brown).
pub const SEED_COLOR: &str = "#5b3a1e";

/// Leaf body color (vibrant green).
pub const LEAF_COLOR: &str = "#22c55e";

/// Stem display color (olive).
pub const STEM_COLOR: &str = "#6b8e23";

/// Root display color (amber).
pub const ROOT_COLOR: &str = "#f59e0b";

// ── Connective tubing ───────────────────────────────────────────

/// Root tube RGB components, interpolated with a depth-driven alpha.
pub const ROOT_TUBE_RGB: (u8, u8, u8) = (245, 158, 11);

/// Base root tube width as a fraction of the smaller cell dimension.
pub const ROOT_TUBE_WIDTH_FACTOR: f64 = 0.55;

/// Root tip cap radius as a fraction of the tube width.
pub const ROOT_TIP_CAP_FACTOR: f64 = 0.42;

/// Stem tube stroke (yellow-green, lighter than the stem display color).
pub const STEM_TUBE_COLOR: &str = "#9ACD32";

/// Stem tube width as a fraction of the smaller cell dimension.
pub const STEM_TUBE_WIDTH_FACTOR: f64 = 0.45;

// ── Seeds and leaves ────────────────────────────────────────────

/// Seed ellipse horizontal radius as a fraction of the smaller cell dimension.
pub const SEED_RX_FACTOR: f64 = 0.36;

/// Seed ellipse vertical radius (slightly squashed).
pub const SEED_RY_FACTOR: f64 = 0.28;

/// Leaf frond tip inset toward the cell corner, avoids sharp star points.
pub const FROND_TIP_INSET: f64 = 0.90;

/// Leaf frond base width as a fraction of the smaller cell dimension.
pub const FROND_BASE_FACTOR: f64 = 0.38;
