//! Grid module - the 9x9 occupancy board
//!
//! Cells are binary (occupied / empty) and never remember which shape filled
//! them. Uses a flat array for cache locality and zero-allocation queries.
//! Coordinates: (row, col) where both range 0..8, row 0 at the top.

use std::fmt;

use arrayvec::ArrayVec;

use crate::catalog::Shape;
use crate::types::{GRID_CELLS, GRID_SIZE};

/// Why a shape cannot go at a given anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    /// An occupied cell of the shape would land outside the grid.
    OutOfBounds,
    /// An occupied cell of the shape would land on a filled cell.
    Collision,
}

impl fmt::Display for Blocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blocked::OutOfBounds => f.write_str("shape would leave the grid"),
            Blocked::Collision => f.write_str("shape overlaps a filled cell"),
        }
    }
}

/// Rows and columns removed by one [`Grid::clear_full_lines`] call, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedLines {
    pub rows: ArrayVec<u8, { GRID_SIZE as usize }>,
    pub cols: ArrayVec<u8, { GRID_SIZE as usize }>,
}

impl ClearedLines {
    /// Number of cleared rows plus cleared columns
    pub fn count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The game grid - 9 rows x 9 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of occupancy flags, row-major order (row * SIZE + col)
    cells: [bool; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_CELLS],
        }
    }

    /// Create a grid from a row-major occupancy matrix
    pub fn from_rows(rows: [[bool; GRID_SIZE as usize]; GRID_SIZE as usize]) -> Self {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            grid.cells[r * GRID_SIZE as usize..(r + 1) * GRID_SIZE as usize].copy_from_slice(row);
        }
        grid
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (GRID_SIZE as usize) + (col as usize))
    }

    /// Side length of the grid
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Occupancy at (row, col); None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// In bounds and empty
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(false))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(true))
    }

    /// Check a placement without touching the grid.
    ///
    /// Stops at the first occupied shape cell that is out of bounds or on a
    /// filled cell.
    pub fn check_place(&self, shape: &Shape, row: i8, col: i8) -> Result<(), Blocked> {
        for &(dy, dx) in shape.cells() {
            let r = row.saturating_add(dy as i8);
            let c = col.saturating_add(dx as i8);
            match Self::index(r, c) {
                None => return Err(Blocked::OutOfBounds),
                Some(idx) if self.cells[idx] => return Err(Blocked::Collision),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// True only if every occupied cell of `shape` lands in bounds on an empty cell
    pub fn can_place(&self, shape: &Shape, row: i8, col: i8) -> bool {
        self.check_place(shape, row, col).is_ok()
    }

    /// Fill every occupied cell of `shape` anchored at (row, col).
    ///
    /// Re-validates first; on rejection nothing changes. Returns the number of
    /// cells filled.
    pub fn place(&mut self, shape: &Shape, row: i8, col: i8) -> Result<u8, Blocked> {
        self.check_place(shape, row, col)?;

        for &(dy, dx) in shape.cells() {
            if let Some(idx) = Self::index(row + dy as i8, col + dx as i8) {
                self.cells[idx] = true;
            }
        }

        Ok(shape.cell_count())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_SIZE as usize {
            return false;
        }
        let start = row * GRID_SIZE as usize;
        self.cells[start..start + GRID_SIZE as usize]
            .iter()
            .all(|&filled| filled)
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= GRID_SIZE as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(col)
            .step_by(GRID_SIZE as usize)
            .all(|&filled| filled)
    }

    /// Empty every full row and every full column.
    ///
    /// Rows and columns are both judged against the grid as it stands before
    /// this call, so a row and a column sharing a cell are cleared together.
    /// Zero-allocation.
    pub fn clear_full_lines(&mut self) -> ClearedLines {
        let size = GRID_SIZE as usize;
        let mut cleared = ClearedLines::default();

        for i in 0..size {
            if self.is_row_full(i) {
                cleared.rows.push(i as u8);
            }
            if self.is_col_full(i) {
                cleared.cols.push(i as u8);
            }
        }

        for &row in &cleared.rows {
            let start = row as usize * size;
            self.cells[start..start + size].fill(false);
        }
        for &col in &cleared.cols {
            for row in 0..size {
                self.cells[row * size + col as usize] = false;
            }
        }

        cleared
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Copy occupancy into a 2D matrix (row-major)
    pub fn write_rows(&self, out: &mut [[bool; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        let size = GRID_SIZE as usize;
        for (r, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * size..(r + 1) * size]);
        }
    }

    /// Empty the entire grid
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// Set a single cell (for tests)
    #[cfg(test)]
    pub(crate) fn set(&mut self, row: i8, col: i8, filled: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
