//! Canonical cell model: coordinates, kind tags, and display colors.
//!
//! A [`Cell`] is one typed unit of the simulation grid, in grid space
//! (origin bottom-left, y increasing upward). Cells are built fresh from
//! each backend snapshot by [`crate::snapshot`], are immutable for the
//! duration of a render pass, and are replaced wholesale on the next fetch.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use crate::consts::{DEFAULT_ACCENT, LEAF_COLOR, ROOT_COLOR, SEED_COLOR, STEM_COLOR};

/// Biological kind tag for a grid cell.
///
/// The backend sends free-form type strings; anything outside the four
/// recognized kinds is preserved verbatim in `Other` and painted by the
/// fallback renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Seed,
    Leaf,
    Stem,
    Root,
    Other(String),
}

impl CellKind {
    /// Parse a raw backend type string, case-insensitively.
    ///
    /// `None` and empty strings map to `Other("")` so an untyped cell still
    /// reaches the fallback renderer rather than vanishing.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let lower = raw.unwrap_or("").to_lowercase();
        match lower.as_str() {
            "seed" => Self::Seed,
            "leaf" => Self::Leaf,
            "stem" => Self::Stem,
            "root" => Self::Root,
            _ => Self::Other(lower),
        }
    }

    /// Fixed display color for this kind, used by the snapshot adapter and
    /// as the fallback fill when a cell carries no explicit color.
    #[must_use]
    pub fn display_color(&self) -> &'static str {
        match self {
            Self::Seed => SEED_COLOR,
            Self::Leaf => LEAF_COLOR,
            Self::Stem => STEM_COLOR,
            Self::Root => ROOT_COLOR,
            Self::Other(_) => DEFAULT_ACCENT,
        }
    }

    /// Whether this kind has a dedicated shape renderer.
    #[must_use]
    pub fn has_shape_renderer(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// One typed grid cell from a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Column in grid space, expected within `[0, cols)`.
    pub x: i64,
    /// Row in grid space, origin at the bottom, expected within `[0, rows)`.
    pub y: i64,
    /// Biological kind tag.
    pub kind: CellKind,
    /// Explicit display color override; consulted only by the fallback
    /// renderer when the kind is unrecognized.
    pub color: Option<String>,
}

impl Cell {
    /// Build a cell from raw snapshot fields.
    #[must_use]
    pub fn new(x: i64, y: i64, kind: CellKind) -> Self {
        Self { x, y, kind, color: None }
    }

    /// Color the fallback renderer should use for this cell.
    #[must_use]
    pub fn fallback_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_ACCENT)
    }
}
