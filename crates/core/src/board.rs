//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that was locked there. Storage is a flat row-major array, so the
//! board is `Copy`-cheap to snapshot and never allocates.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one [`Board::clear_full_rows`] pass, bottom first.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Plain grid copy used by snapshots.
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Cells of row `y`, left to right. Out-of-range rows are empty slices.
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= BOARD_HEIGHT as usize {
            return &[];
        }
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shifting the rows above down and opening empty
    /// rows at the top.
    ///
    /// Single bottom-up pass with a read cursor and a write cursor: each
    /// surviving row is copied to the lowest free slot, so survivors keep
    /// their top-to-bottom order and no row is examined twice or skipped.
    /// Returns the cleared row indices (bottom to top); the count is `len()`.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Copy a piece's kind into every occupied cell of its footprint.
    ///
    /// The placement is not validated here; callers check it first. Cells
    /// that would land outside the board are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Fill an entire row with one kind. Handy for building test scenarios.
    pub fn fill_row(&mut self, y: usize, kind: ShapeKind) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(Some(kind));
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a 2D grid without allocating.
    pub fn write_grid(&self, out: &mut Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_row_full_needs_every_cell() {
        let mut board = Board::new();
        for x in 0..9 {
            board.set(x, 19, Some(ShapeKind::I));
        }
        assert!(!board.is_row_full(19));

        board.set(9, 19, Some(ShapeKind::Z));
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));
        assert!(!board.is_row_full(20));
    }

    #[test]
    fn test_clear_keeps_survivor_order() {
        let mut board = Board::new();
        // Survivors interleaved with full rows.
        board.set(0, 15, Some(ShapeKind::T));
        board.fill_row(16, ShapeKind::I);
        board.set(1, 17, Some(ShapeKind::O));
        board.fill_row(18, ShapeKind::I);
        board.set(2, 19, Some(ShapeKind::S));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[18, 16]);

        assert_eq!(board.get(2, 19), Some(Some(ShapeKind::S)));
        assert_eq!(board.get(1, 18), Some(Some(ShapeKind::O)));
        assert_eq!(board.get(0, 17), Some(Some(ShapeKind::T)));
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_clear_whole_board() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as usize {
            board.fill_row(y, ShapeKind::L);
        }
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), BOARD_HEIGHT as usize);
        assert!(board.is_empty());
    }

    #[test]
    fn test_write_grid_matches_get() {
        let mut board = Board::new();
        board.set(3, 7, Some(ShapeKind::J));

        let mut grid: Grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_grid(&mut grid);
        assert_eq!(grid[7][3], Some(ShapeKind::J));
        assert_eq!(grid[0][0], None);
    }
}
