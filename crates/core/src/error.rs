//! Error module - failures the rules engine can report
//!
//! Normal play never fails: boards are always built by the engine and
//! directions come from a closed enum. These errors only surface at the
//! edges, where a caller hands in a size, a string, or raw rows.

use thiserror::Error;

use crate::types::{Cell, MAX_TILE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("board size {size} is below the minimum of {}", MIN_BOARD_SIZE)]
    InvalidSize { size: usize },

    #[error("unknown direction: {0:?}")]
    InvalidDirection(String),

    #[error("cell ({row}, {col}) holds {value}, which is not a power of two between 2 and {}", MAX_TILE)]
    InvalidTile { row: usize, col: usize, value: Cell },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },
}
