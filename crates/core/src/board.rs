//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is vacant or filled with a color.
//! Uses a flat row-major vector sized once at construction.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Row 0 is the top of the visible grid.

use crate::config::{ConfigError, MAX_DIMENSION};
use crate::types::{Cell, Color};

/// The game board - fixed dimensions, flat storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new all-vacant board
    ///
    /// Zero or oversized dimensions are rejected here so that no later
    /// operation has to deal with them.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(ConfigError::DimensionTooLarge { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Vacant; rows * cols],
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(y * self.cols + x)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// True iff (x, y) is inside the grid and vacant
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Vacant))
    }

    /// True iff (x, y) is inside the grid and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled(_)))
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

    /// Fill an in-bounds cell with a color
    ///
    /// Callers are expected to skip rows above the grid; an out-of-bounds
    /// write is refused and reported as false.
    pub fn set_cell(&mut self, x: i32, y: i32, color: Color) -> bool {
        self.set(x, y, Cell::Filled(color))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| !cell.is_vacant()))
            .unwrap_or(false)
    }

    /// Cells of one row, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows {
            return None;
        }
        let start = y * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Rows top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Remove row `y`: every row above moves down by one and row 0 becomes vacant
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.rows {
            return;
        }

        let width = self.cols;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        for cell in &mut self.cells[..width] {
            *cell = Cell::Vacant;
        }
    }

    /// Clear every full row and return how many were removed
    ///
    /// Rows are scanned top to bottom and each full row collapses the moment it
    /// is found. The row that slides into a cleared slot came from above the
    /// scan position, so it has already been checked.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.rows {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_vacant()).count()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to vacant
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Vacant;
        }
    }
}
