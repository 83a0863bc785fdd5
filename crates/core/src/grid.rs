//! Grid module - the tile matrix of one round
//!
//! The grid is an R x C matrix where each cell is empty (`0`) or holds a
//! power-of-two tile. Uses a flat row-major vector for cache locality.
//! Coordinates: (row, col) where row ranges 0..rows (top to bottom) and
//! col ranges 0..cols (left to right).

use thiserror::Error;

use crate::types::{is_tile_value, Tile, MAX_DIMENSION, MIN_DIMENSION};

/// Reasons a matrix cannot become a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must be between {min}x{min} and {max}x{max}, got {rows}x{cols}")]
    Dimensions {
        rows: usize,
        cols: usize,
        min: usize,
        max: usize,
    },
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    BadTile { row: usize, col: usize, value: Tile },
}

/// Fixed-size tile matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Dimensions are clamped to `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let cols = cols.clamp(MIN_DIMENSION, MAX_DIMENSION);
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Build a grid from nested rows, validating shape and tile values.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&height)
            || !(MIN_DIMENSION..=MAX_DIMENSION).contains(&width)
        {
            return Err(GridError::Dimensions {
                rows: height,
                cols: width,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(GridError::BadTile { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Copy one column top to bottom.
    pub fn column(&self, col: usize) -> Option<Vec<Tile>> {
        if col >= self.cols {
            return None;
        }
        Some((0..self.rows).map(|r| self.cells[r * self.cols + col]).collect())
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(0))
    }

    pub fn has_empty(&self) -> bool {
        self.cells.contains(&0)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }

    /// Nested-row copy of the grid (the persisted shape).
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    /// Mirror every row (left <-> right).
    pub fn reverse_rows(&self) -> Self {
        let mut out = self.clone();
        for row in out.cells.chunks_mut(self.cols) {
            row.reverse();
        }
        out
    }

    /// Mirror every column (top <-> bottom).
    pub fn reverse_cols(&self) -> Self {
        let mut out = self.clone();
        for r in 0..self.rows {
            let src = (self.rows - 1 - r) * self.cols;
            let dst = r * self.cols;
            out.cells[dst..dst + self.cols].copy_from_slice(&self.cells[src..src + self.cols]);
        }
        out
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                cells.push(self.cells[r * self.cols + c]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}
