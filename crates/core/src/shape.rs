//! Shape module - piece matrices and clockwise rotation
//!
//! A piece is a small rectangular 0/1 matrix. Rotation produces a new matrix
//! (90° clockwise, the rectangle's width and height swap) and never mutates in place.
//! There is no kick table per kind: the kick search lives in [`crate::movement`].

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};

use crate::types::ShapeKind;

/// Largest matrix side supported (the I piece is 4 long)
pub const MAX_SIDE: usize = 4;

/// Immutable binary cell matrix, at most 4x4
///
/// Stored as a bitmask (`bit = y * 4 + x`), so matrices are `Copy` and two
/// rotation states can be compared with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    width: u8,
    height: u8,
    bits: u16,
}

impl Matrix {
    /// Build from row-major 0/1 rows (top row first)
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty, ragged, or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SIDE, "matrix height out of range");
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SIDE, "matrix width out of range");

        let mut bits = 0u16;
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged matrix row {}", y);
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    bits |= 1 << (y * MAX_SIDE + x);
                }
            }
        }

        Self {
            width: width as u8,
            height: rows.len() as u8,
            bits,
        }
    }

    /// Spawn orientation of a canonical piece kind
    pub fn of(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            ShapeKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            ShapeKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            ShapeKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            ShapeKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            ShapeKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            ShapeKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Is the cell at column `x`, row `y` filled (false outside the rectangle)
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.bits & (1 << (y * MAX_SIDE + x)) != 0
    }

    /// Filled cells as `(dx, dy)` offsets from the matrix origin, row-major
    pub fn cells(&self) -> ArrayVec<(i32, i32), 16> {
        let mut out = ArrayVec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get(x, y) {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    /// 90° clockwise rotation
    pub fn rotate_cw(&self) -> Self {
        let h = self.height();
        let w = self.width();
        let mut bits = 0u16;
        for y in 0..h {
            for x in 0..w {
                if self.get(x, y) {
                    // (x, y) lands on row x, column h - 1 - y
                    bits |= 1 << (x * MAX_SIDE + (h - 1 - y));
                }
            }
        }
        Self {
            width: self.height,
            height: self.width,
            bits,
        }
    }

    /// Distinct rotation states, starting with `self`, in clockwise order
    pub fn unique_rotations(&self) -> ArrayVec<Matrix, 4> {
        let mut out: ArrayVec<Matrix, 4> = ArrayVec::new();
        let mut cur = *self;
        for _ in 0..4 {
            if !out.contains(&cur) {
                out.push(cur);
            }
            cur = cur.rotate_cw();
        }
        out
    }

    /// Rows as 0/1 vectors (for previews and serialization)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height())
            .map(|y| (0..self.width()).map(|x| self.get(x, y) as u8).collect())
            .collect()
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}
