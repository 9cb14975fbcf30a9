//! Board module - the game grid as an immutable value
//!
//! The board is an N×N grid where each cell is empty (`0`) or holds a power of two.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (row, col) where row 0 is the top edge and col 0 the left edge.
//!
//! There is no public mutator. Every transformation (rotation, sliding, spawning)
//! builds a new `Board`, so a board handed to a caller never changes under it.

use std::fmt;
use std::slice::ChunksExact;

use crate::error::CoreError;
use crate::types::{Cell, MAX_TILE, MIN_BOARD_SIZE};

/// The game board - `size` columns x `size` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Result<Self, CoreError> {
        if size < MIN_BOARD_SIZE {
            return Err(CoreError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a board from rows, validating shape and tile values
    ///
    /// Rows must form a square of edge `MIN_BOARD_SIZE` or more, and every
    /// non-zero cell must be a power of two greater than 1.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, CoreError> {
        let size = rows.len();
        if size < MIN_BOARD_SIZE {
            return Err(CoreError::InvalidSize { size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(CoreError::RaggedBoard {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(CoreError::InvalidTile { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Wrap already-valid cells; callers inside the crate guarantee the shape
    pub(crate) fn from_flat(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Edge length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// A copy of this board with one cell replaced
    ///
    /// Out-of-bounds positions return an unchanged copy.
    pub(crate) fn with_cell(&self, row: usize, col: usize, value: Cell) -> Self {
        let mut next = self.clone();
        if let Some(idx) = self.index(row, col) {
            next.cells[idx] = value;
        }
        next
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.size)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rotate 90° clockwise: cell (r, c) moves to (c, size - 1 - r)
    pub fn rotate_cw(&self) -> Self {
        let n = self.size;
        let mut cells = vec![0; n * n];
        for r in 0..n {
            for c in 0..n {
                cells[c * n + (n - 1 - r)] = self.cells[r * n + c];
            }
        }
        Self { size: n, cells }
    }

    /// Rotate clockwise `turns` quarter turns (taken mod 4)
    pub fn rotated_cw(&self, turns: usize) -> Self {
        (0..turns % 4).fold(self.clone(), |board, _| board.rotate_cw())
    }

    /// Positions of all empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 0)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 0).count()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Check if any cell holds exactly `value`
    pub fn contains(&self, value: Cell) -> bool {
        self.cells.contains(&value)
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Convert to nested rows for display and serialization
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

/// `0` or a power of two in `2..=MAX_TILE`
fn is_tile_value(value: Cell) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for row in self.rows() {
            for (col, &cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if cell == 0 {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", cell, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
