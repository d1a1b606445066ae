//! Backend payload shapes and their normalization into canonical cells.
//!
//! The backend is duck-typed: the state endpoint sends `{x, y, type}` cell
//! objects, while the frame endpoint may send either those objects or bare
//! `[x, y, type?]` tuples, and the two disagree on counter field names
//! (`currentTick` vs `tick`, `totalDays` vs `day`). All of that variance is
//! absorbed here as a tagged decode step — nothing downstream of this module
//! ever branches on payload shape.
//!
//! ERROR HANDLING
//! ==============
//! Decoding is total: malformed entries become [`RawPosition::Invalid`] and
//! are dropped during normalization, missing collections default to empty,
//! and non-numeric counters read as `None`. A bad payload can blank the
//! scene but never crash the draw.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::cell::{Cell, CellKind};
use crate::geometry::GridSize;

/// One position entry as found on the wire, in any of the accepted shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPosition {
    /// `{x, y, type?, color?}` object form.
    Object {
        x: Option<f64>,
        y: Option<f64>,
        #[serde(rename = "type")]
        kind: Option<String>,
        color: Option<String>,
    },
    /// `[x, y, type]` tuple form.
    Triple(f64, f64, Option<String>),
    /// `[x, y]` tuple form.
    Pair(f64, f64),
    /// Anything else; dropped during normalization.
    Invalid(serde_json::Value),
}

impl RawPosition {
    /// Convert to a canonical cell, or `None` when coordinates are missing
    /// or non-finite. Explicit wire colors are preserved.
    #[must_use]
    pub fn to_cell(&self) -> Option<Cell> {
        let (x, y, kind, color) = match self {
            Self::Object { x, y, kind, color } => ((*x)?, (*y)?, kind.as_deref(), color.clone()),
            Self::Triple(x, y, kind) => (*x, *y, kind.as_deref(), None),
            Self::Pair(x, y) => (*x, *y, None, None),
            Self::Invalid(_) => return None,
        };
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let mut cell = Cell::new(x.floor() as i64, y.floor() as i64, CellKind::from_raw(kind));
        cell.color = color;
        Some(cell)
    }
}

/// Full world state from `GET /genetics/v1/state/:world`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateResponse {
    pub total_ticks: Option<f64>,
    pub total_days: Option<f64>,
    pub current_tick: Option<f64>,
    pub active: Option<bool>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub cells: Vec<RawPosition>,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    pub counters: Option<serde_json::Map<String, serde_json::Value>>,
}

impl StateResponse {
    /// Grid dimensions from the payload, or `fallback` where absent/invalid.
    #[must_use]
    pub fn grid_size(&self, fallback: GridSize) -> GridSize {
        GridSize {
            cols: dimension_or(self.width, fallback.cols),
            rows: dimension_or(self.height, fallback.rows),
        }
    }

    /// Normalize the cell list, stamping each cell with the fixed display
    /// color for its kind.
    #[must_use]
    pub fn to_cells(&self) -> Vec<Cell> {
        let colored = self.cells.iter().filter_map(|raw| {
            raw.to_cell().map(|mut cell| {
                cell.color = Some(cell.kind.display_color().to_owned());
                cell
            })
        });
        dedup_last_write(colored)
    }
}

/// Frame payload from `GET /genetics/v1.0/world/:world/frame?step=n`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameResponse {
    #[serde(alias = "tick")]
    pub current_tick: Option<f64>,
    #[serde(alias = "day")]
    pub total_days: Option<f64>,
    pub total_ticks: Option<f64>,
    pub positions: Vec<RawPosition>,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    pub counters: Option<serde_json::Map<String, serde_json::Value>>,
}

impl FrameResponse {
    /// Normalize the position list, preserving any explicit wire colors.
    #[must_use]
    pub fn to_cells(&self) -> Vec<Cell> {
        dedup_last_write(self.positions.iter().filter_map(RawPosition::to_cell))
    }
}

/// Read a counter value as a whole number, `None` when absent or not finite.
#[must_use]
pub fn counter(value: Option<f64>) -> Option<i64> {
    #[allow(clippy::cast_possible_truncation)]
    value.filter(|v| v.is_finite()).map(|v| v as i64)
}

fn dimension_or(value: Option<f64>, fallback: u32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    value
        .filter(|v| v.is_finite() && *v >= 1.0)
        .map_or(fallback, |v| v as u32)
}

/// Collapse duplicate coordinates, keeping the payload of the last entry at
/// the position of the first — the snapshot contract is last-write-wins.
fn dedup_last_write(cells: impl Iterator<Item = Cell>) -> Vec<Cell> {
    let mut out: Vec<Cell> = Vec::new();
    let mut by_coord: HashMap<(i64, i64), usize> = HashMap::new();
    for cell in cells {
        match by_coord.get(&(cell.x, cell.y)) {
            Some(&idx) => out[idx] = cell,
            None => {
                by_coord.insert((cell.x, cell.y), out.len());
                out.push(cell);
            }
        }
    }
    out
}
