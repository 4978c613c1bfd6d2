//! Pieces module - shape matrices and clockwise rotation
//!
//! A piece is a small rectangular 0/1 matrix plus the board position of its
//! top-left cell. Orientation is not tracked separately: rotating replaces
//! the matrix with its 90° clockwise transform (width and height swap), and
//! there are no wall kicks.

use crate::types::{ShapeKind, BOARD_WIDTH};

/// Largest matrix side across all shapes (the I bar)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Rectangular occupancy matrix of up to 4x4 cells.
///
/// Cells outside `width x height` are always empty, so two matrices with the
/// same layout compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 values.
    ///
    /// Returns `None` for an empty, ragged or oversized layout.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_SIZE || height > MAX_SHAPE_SIZE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self::from_rows_unchecked(rows))
    }

    fn from_rows_unchecked(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            width: rows[0].len() as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    /// Base (spawn) matrix for a shape kind
    pub fn base(kind: ShapeKind) -> Self {
        let rows: &[&[u8]] = match kind {
            ShapeKind::I => &[&[1, 1, 1, 1]],
            ShapeKind::O => &[&[1, 1], &[1, 1]],
            ShapeKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            ShapeKind::L => &[&[1, 0], &[1, 0], &[1, 1]],
            ShapeKind::J => &[&[0, 1], &[0, 1], &[1, 1]],
            ShapeKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            ShapeKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        };
        Self::from_rows_unchecked(rows)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether cell (x, y) of the matrix is filled. Outside the matrix is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Offsets `(dx, dy)` of the filled cells, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// 90° clockwise rotation.
    ///
    /// Row `r` of the result is column `r` of the original read bottom to
    /// top: `new[r][c] = old[h - 1 - c][r]`. Pure; `self` is unchanged.
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Rows as `0`/`1` strings, e.g. `["010", "111"]` for T.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| if self.cells[y][x] { '1' } else { '0' })
                    .collect()
            })
            .collect()
    }
}

/// A falling piece: shape, kind (colour) and anchor of the matrix's top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn anchor: horizontally centred, top row.
    pub fn new(kind: ShapeKind) -> Self {
        let shape = ShapeMatrix::base(kind);
        Self {
            kind,
            shape,
            x: spawn_x(shape.width()),
            y: 0,
        }
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece at the same anchor with its shape rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Spawn column for a matrix of the given width
pub fn spawn_x(shape_width: u8) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape_width / 2) as i8
}
