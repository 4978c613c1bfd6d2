//! Placement validation.
//!
//! One predicate guards every move, rotation and spawn: each filled cell of
//! the shape, offset by the anchor, must be on the board and empty. Empty
//! cells of the matrix are ignored, so a matrix's bounding box may hang off
//! the board as long as no filled cell does.

use crate::board::Board;
use crate::piece::{Piece, ShapeMatrix};
use crate::types::BOARD_HEIGHT;

/// Whether `shape` anchored at (`anchor_x`, `anchor_y`) fits on `board`.
pub fn is_valid_placement(shape: &ShapeMatrix, anchor_x: i8, anchor_y: i8, board: &Board) -> bool {
    shape.occupied().all(|(dx, dy)| {
        board.is_empty_at(anchor_x.saturating_add(dx), anchor_y.saturating_add(dy))
    })
}

/// Whether the piece fits at its own anchor
pub fn fits(piece: &Piece, board: &Board) -> bool {
    is_valid_placement(&piece.shape, piece.x, piece.y, board)
}

/// Rows the piece can fall before it comes to rest.
///
/// Zero when the piece is already resting (or does not fit at all).
pub fn drop_distance(piece: &Piece, board: &Board) -> u8 {
    let mut distance: i8 = 0;
    while distance < BOARD_HEIGHT as i8
        && is_valid_placement(&piece.shape, piece.x, piece.y.saturating_add(distance + 1), board)
    {
        distance += 1;
    }
    distance as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ShapeKind, BOARD_WIDTH};

    #[test]
    fn test_spawn_fits_on_empty_board() {
        let board = Board::new();
        for kind in ShapeKind::ALL {
            assert!(fits(&Piece::new(kind), &board), "{:?}", kind);
        }
    }

    #[test]
    fn test_walls_and_floor() {
        let board = Board::new();
        let o = ShapeMatrix::base(ShapeKind::O);

        assert!(is_valid_placement(&o, 0, 0, &board));
        assert!(!is_valid_placement(&o, -1, 0, &board));
        assert!(is_valid_placement(&o, BOARD_WIDTH as i8 - 2, 0, &board));
        assert!(!is_valid_placement(&o, BOARD_WIDTH as i8 - 1, 0, &board));
        assert!(is_valid_placement(&o, 0, BOARD_HEIGHT as i8 - 2, &board));
        assert!(!is_valid_placement(&o, 0, BOARD_HEIGHT as i8 - 1, &board));
        assert!(!is_valid_placement(&o, 0, -1, &board));
    }

    #[test]
    fn test_empty_matrix_cells_may_overhang() {
        let board = Board::new();
        let bottom_row_only = ShapeMatrix::from_rows(&[&[0, 0], &[1, 1]]).unwrap();
        assert!(is_valid_placement(&bottom_row_only, 0, -1, &board));
        assert!(!is_valid_placement(&bottom_row_only, 0, -2, &board));

        let right_column_only = ShapeMatrix::from_rows(&[&[0, 1], &[0, 1]]).unwrap();
        assert!(is_valid_placement(&right_column_only, -1, 0, &board));
        assert!(!is_valid_placement(&right_column_only, BOARD_WIDTH as i8 - 1, 0, &board));
    }

    #[test]
    fn test_occupied_cell_blocks() {
        let mut board = Board::new();
        board.set(5, 5, Some(ShapeKind::Z));
        let o = ShapeMatrix::base(ShapeKind::O);

        assert!(!is_valid_placement(&o, 4, 4, &board));
        assert!(!is_valid_placement(&o, 5, 5, &board));
        assert!(is_valid_placement(&o, 6, 5, &board));
        assert!(is_valid_placement(&o, 3, 5, &board));
    }

    #[test]
    fn test_drop_distance_on_empty_board() {
        let board = Board::new();
        let piece = Piece::new(ShapeKind::L);
        assert_eq!(drop_distance(&piece, &board), BOARD_HEIGHT - 3);
    }

    #[test]
    fn test_drop_distance_onto_stack() {
        let mut board = Board::new();
        board.fill_row(10, ShapeKind::I);
        let piece = Piece::new(ShapeKind::O);
        // O is 2 tall: rests with its bottom on row 9.
        assert_eq!(drop_distance(&piece, &board), 8);
    }
}
