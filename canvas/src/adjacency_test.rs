use super::*;
use crate::cell::{Cell, CellKind};

fn cell(x: i64, y: i64, kind: &str) -> Cell {
    Cell::new(x, y, CellKind::from_raw(Some(kind)))
}

#[test]
fn empty_list_builds_empty_index() {
    let index = AdjacencyIndex::build(&[]);
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert!(index.roots().is_empty());
    assert!(index.stems().is_empty());
}

#[test]
fn kind_at_finds_every_cell() {
    let cells = vec![cell(0, 0, "root"), cell(1, 2, "leaf"), cell(3, 3, "rock")];
    let index = AdjacencyIndex::build(&cells);
    assert_eq!(index.kind_at(0, 0), Some(&CellKind::Root));
    assert_eq!(index.kind_at(1, 2), Some(&CellKind::Leaf));
    assert_eq!(index.kind_at(3, 3), Some(&CellKind::Other("rock".to_owned())));
    assert_eq!(index.kind_at(9, 9), None);
}

#[test]
fn member_lists_preserve_input_order() {
    let cells = vec![
        cell(2, 0, "root"),
        cell(0, 0, "stem"),
        cell(1, 0, "root"),
        cell(1, 1, "stem"),
    ];
    let index = AdjacencyIndex::build(&cells);
    assert_eq!(index.roots(), &[(2, 0), (1, 0)]);
    assert_eq!(index.stems(), &[(0, 0), (1, 1)]);
}

#[test]
fn duplicate_coordinate_is_last_write_wins() {
    let cells = vec![cell(1, 1, "root"), cell(1, 1, "leaf")];
    let index = AdjacencyIndex::build(&cells);
    assert_eq!(index.kind_at(1, 1), Some(&CellKind::Leaf));
    assert!(index.roots().is_empty(), "superseded root must not be indexed");
    assert_eq!(index.len(), 1);
}

#[test]
fn duplicate_root_listed_once() {
    let cells = vec![cell(1, 1, "root"), cell(1, 1, "root")];
    let index = AdjacencyIndex::build(&cells);
    assert_eq!(index.roots(), &[(1, 1)]);
}

#[test]
fn is_kind_distinguishes_types() {
    let cells = vec![cell(0, 0, "root"), cell(1, 0, "stem")];
    let index = AdjacencyIndex::build(&cells);
    assert!(index.is_kind(0, 0, &CellKind::Root));
    assert!(!index.is_kind(1, 0, &CellKind::Root));
    assert!(!index.is_kind(5, 5, &CellKind::Root));
}

// --- degree ---

#[test]
fn degree_counts_all_four_directions() {
    // Cross of roots centered at (1, 1).
    let cells = vec![
        cell(1, 1, "root"),
        cell(0, 1, "root"),
        cell(2, 1, "root"),
        cell(1, 0, "root"),
        cell(1, 2, "root"),
    ];
    let index = AdjacencyIndex::build(&cells);
    assert_eq!(index.degree(1, 1, &CellKind::Root), 4);
    assert_eq!(index.degree(0, 1, &CellKind::Root), 1);
}

#[test]
fn degree_ignores_other_kinds_and_diagonals() {
    let cells = vec![
        cell(1, 1, "root"),
        cell(2, 1, "stem"),
        cell(0, 0, "root"), // diagonal neighbor
    ];
    let index = AdjacencyIndex::build(&cells);
    assert_eq!(index.degree(1, 1, &CellKind::Root), 0);
}

#[test]
fn degree_of_isolated_cell_is_zero() {
    let cells = vec![cell(3, 3, "root")];
    let index = AdjacencyIndex::build(&cells);
    assert_eq!(index.degree(3, 3, &CellKind::Root), 0);
}
