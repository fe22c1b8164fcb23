#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure move validator for the sliding-tile board.
//!
//! Legality is a function of nothing but the empty slot's position and the
//! board size, so this system carries no state: the board consults it before
//! every mutation and adapters consult it when translating input.

use tile_slide_core::{Direction, GridCoord, GridSize};

/// Offsets of the four edge-sharing neighbours, in (column, row) deltas.
const NEIGHBOUR_OFFSETS: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Enumerates the cells whose tiles may slide into the empty slot.
///
/// Returns between two and four cells in a fixed order (above, below, left,
/// right of the empty slot): two for a corner, three for an edge, four for
/// an interior empty slot.
#[must_use]
pub fn legal_moves(empty: GridCoord, size: GridSize) -> Vec<GridCoord> {
    let mut moves = Vec::with_capacity(NEIGHBOUR_OFFSETS.len());
    for (d_column, d_row) in NEIGHBOUR_OFFSETS {
        if let Some(cell) = offset_cell(empty, d_column, d_row, size) {
            moves.push(cell);
        }
    }
    moves
}

/// Reports whether the tile at `cell` may slide into the empty slot.
#[must_use]
pub fn is_legal(cell: GridCoord, empty: GridCoord, size: GridSize) -> bool {
    size.contains(cell) && cell.is_adjacent(empty)
}

/// Resolves a directional key press into the cell whose tile should slide.
///
/// The direction names the way the tile travels, so the source cell sits on
/// the opposite side of the empty slot: `Up` selects the cell below the
/// empty slot, `Down` the cell above, `Left` the cell to its right, and
/// `Right` the cell to its left. Returns `None` when that cell would fall
/// outside the board.
#[must_use]
pub fn slide_source(empty: GridCoord, direction: Direction, size: GridSize) -> Option<GridCoord> {
    let (d_column, d_row) = match direction {
        Direction::Up => (0, 1),
        Direction::Down => (0, -1),
        Direction::Left => (1, 0),
        Direction::Right => (-1, 0),
    };
    offset_cell(empty, d_column, d_row, size)
}

fn offset_cell(origin: GridCoord, d_column: i64, d_row: i64, size: GridSize) -> Option<GridCoord> {
    let column = i64::from(origin.column()).checked_add(d_column)?;
    let row = i64::from(origin.row()).checked_add(d_row)?;
    if column < 0 || row < 0 {
        return None;
    }
    let cell = GridCoord::new(u32::try_from(column).ok()?, u32::try_from(row).ok()?);
    size.contains(cell).then_some(cell)
}

#[cfg(test)]
mod tests {
    use super::{is_legal, legal_moves, slide_source};
    use tile_slide_core::{Direction, GridCoord, GridSize};

    #[test]
    fn corner_empty_slot_yields_two_candidates() {
        let size = GridSize::new(4);
        let moves = legal_moves(GridCoord::new(3, 3), size);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&GridCoord::new(3, 2)));
        assert!(moves.contains(&GridCoord::new(2, 3)));
    }

    #[test]
    fn edge_empty_slot_yields_three_candidates() {
        let size = GridSize::new(4);
        let moves = legal_moves(GridCoord::new(0, 2), size);
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn interior_empty_slot_yields_four_candidates() {
        let size = GridSize::new(3);
        let moves = legal_moves(GridCoord::new(1, 1), size);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn two_by_two_board_always_yields_two_candidates() {
        let size = GridSize::new(2);
        for column in 0..2 {
            for row in 0..2 {
                let moves = legal_moves(GridCoord::new(column, row), size);
                assert_eq!(moves.len(), 2, "empty at ({column}, {row})");
            }
        }
    }

    #[test]
    fn candidates_are_adjacent_and_in_bounds() {
        let size = GridSize::new(5);
        for column in 0..5 {
            for row in 0..5 {
                let empty = GridCoord::new(column, row);
                let moves = legal_moves(empty, size);
                assert!((2..=4).contains(&moves.len()));
                for cell in moves {
                    assert!(size.contains(cell));
                    assert!(cell.is_adjacent(empty));
                    assert!(is_legal(cell, empty, size));
                }
            }
        }
    }

    #[test]
    fn legality_rejects_the_empty_slot_itself() {
        let size = GridSize::new(4);
        let empty = GridCoord::new(1, 1);
        assert!(!is_legal(empty, empty, size));
    }

    #[test]
    fn legality_rejects_diagonal_and_distant_cells() {
        let size = GridSize::new(4);
        let empty = GridCoord::new(1, 1);
        assert!(!is_legal(GridCoord::new(2, 2), empty, size));
        assert!(!is_legal(GridCoord::new(3, 1), empty, size));
        assert!(!is_legal(GridCoord::new(4, 1), empty, size));
    }

    #[test]
    fn up_selects_the_cell_below_the_empty_slot() {
        let size = GridSize::new(4);
        let empty = GridCoord::new(1, 1);
        assert_eq!(
            slide_source(empty, Direction::Up, size),
            Some(GridCoord::new(1, 2))
        );
    }

    #[test]
    fn down_selects_the_cell_above_the_empty_slot() {
        let size = GridSize::new(4);
        let empty = GridCoord::new(1, 1);
        assert_eq!(
            slide_source(empty, Direction::Down, size),
            Some(GridCoord::new(1, 0))
        );
    }

    #[test]
    fn left_selects_the_cell_right_of_the_empty_slot() {
        let size = GridSize::new(4);
        let empty = GridCoord::new(1, 1);
        assert_eq!(
            slide_source(empty, Direction::Left, size),
            Some(GridCoord::new(2, 1))
        );
    }

    #[test]
    fn right_selects_the_cell_left_of_the_empty_slot() {
        let size = GridSize::new(4);
        let empty = GridCoord::new(1, 1);
        assert_eq!(
            slide_source(empty, Direction::Right, size),
            Some(GridCoord::new(0, 1))
        );
    }

    #[test]
    fn slide_sources_off_the_board_resolve_to_none() {
        let size = GridSize::new(4);
        let corner = GridCoord::new(3, 3);
        assert_eq!(slide_source(corner, Direction::Up, size), None);
        assert_eq!(slide_source(corner, Direction::Left, size), None);
        assert_eq!(
            slide_source(corner, Direction::Down, size),
            Some(GridCoord::new(3, 2))
        );
    }
}
