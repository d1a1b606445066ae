//! Per-frame adjacency index for the connective renderers.
//!
//! Built once per draw call from the canonical cell list, never mutated,
//! and discarded with the frame. Supports O(1) "is there a cell of kind T
//! at (x+dx, y+dy)?" queries so the root and stem renderers can walk their
//! networks without scanning the whole list per cell.

#[cfg(test)]
#[path = "adjacency_test.rs"]
mod adjacency_test;

use std::collections::{HashMap, HashSet};

use crate::cell::{Cell, CellKind};

/// The four cardinal neighbor offsets.
pub const NEIGHBORS_4: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The two canonical edge directions, east and north.
///
/// Connective renderers emit edges only in these directions so each
/// undirected pair of adjacent cells produces exactly one tube segment;
/// the west/south reverse edge is implied and skipped.
pub const EDGE_DIRS: [(i64, i64); 2] = [(1, 0), (0, 1)];

/// Coordinate → kind lookup plus insertion-ordered member lists for the
/// connective kinds.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    kinds: HashMap<(i64, i64), CellKind>,
    roots: Vec<(i64, i64)>,
    stems: Vec<(i64, i64)>,
}

impl AdjacencyIndex {
    /// Index the frame's cell list.
    ///
    /// Duplicate coordinates resolve last-write-wins, matching the snapshot
    /// contract; the member lists are deduplicated against the final map so
    /// no edge is ever drawn twice for a doubled coordinate.
    #[must_use]
    pub fn build(cells: &[Cell]) -> Self {
        let mut kinds: HashMap<(i64, i64), CellKind> = HashMap::with_capacity(cells.len());
        for cell in cells {
            kinds.insert((cell.x, cell.y), cell.kind.clone());
        }

        let mut seen = HashSet::with_capacity(cells.len());
        let mut roots = Vec::new();
        let mut stems = Vec::new();
        for cell in cells {
            let at = (cell.x, cell.y);
            if !seen.insert(at) {
                continue;
            }
            match kinds.get(&at) {
                Some(CellKind::Root) => roots.push(at),
                Some(CellKind::Stem) => stems.push(at),
                _ => {}
            }
        }

        Self { kinds, roots, stems }
    }

    /// Kind of the cell at `(x, y)`, if one exists in this frame.
    #[must_use]
    pub fn kind_at(&self, x: i64, y: i64) -> Option<&CellKind> {
        self.kinds.get(&(x, y))
    }

    /// Whether a cell of exactly `kind` occupies `(x, y)`.
    #[must_use]
    pub fn is_kind(&self, x: i64, y: i64, kind: &CellKind) -> bool {
        self.kind_at(x, y) == Some(kind)
    }

    /// Root cells in first-seen order.
    #[must_use]
    pub fn roots(&self) -> &[(i64, i64)] {
        &self.roots
    }

    /// Stem cells in first-seen order.
    #[must_use]
    pub fn stems(&self) -> &[(i64, i64)] {
        &self.stems
    }

    /// Number of 4-neighbors of `(x, y)` holding a cell of `kind`.
    ///
    /// Counts all four directions, unlike edge emission which is restricted
    /// to [`EDGE_DIRS`]; the root renderer uses this to find dead-end tips.
    #[must_use]
    pub fn degree(&self, x: i64, y: i64, kind: &CellKind) -> usize {
        NEIGHBORS_4
            .iter()
            .filter(|(dx, dy)| self.is_kind(x + dx, y + dy, kind))
            .count()
    }

    /// Total number of indexed coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the frame holds no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
