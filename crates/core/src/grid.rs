//! Grid module - a fixed-size field of locked cells
//!
//! Uses a flat row-major vector (`y * cols + x`). Dimensions are fixed when the
//! grid is created; clearing a row shifts everything above it down and inserts
//! an empty row at the top, and garbage insertion drops the top row and appends
//! at the bottom, so the row count never changes.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Row slice (panics on an out-of-range row)
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Number of filled cells in a row
    pub fn filled_in_row(&self, y: usize) -> usize {
        if y >= self.rows {
            return 0;
        }
        self.row(y).iter().filter(|c| c.is_some()).count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.rows && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove a row, shift all rows above it down and empty the top row
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.rows {
            return;
        }
        let width = self.cols;

        // copy_within handles the overlapping shift
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear every full row, sweeping bottom-up
    ///
    /// After a removal the same index is scanned again, since the row above
    /// has slid into it. Returns the index at which each row was removed, in
    /// removal order (two stacked full rows at the floor both report the floor).
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared = Vec::new();
        let mut y = self.rows;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                cleared.push(row);
                self.clear_row(row);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Drop the top row and append `row` at the bottom
    ///
    /// # Panics
    ///
    /// Panics if `row` does not have exactly `cols` cells.
    pub fn push_bottom_row(&mut self, row: &[Cell]) {
        assert_eq!(row.len(), self.cols, "garbage row width mismatch");
        let width = self.cols;
        self.cells.copy_within(width.., 0);
        let bottom = (self.rows - 1) * width;
        self.cells[bottom..].copy_from_slice(row);
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
