//! Rotate module - reduce four slide directions to one
//!
//! Sliding in direction D is expressed as: rotate the board `k` clockwise
//! quarter turns, slide every row left, then rotate `(4 - k) % 4` more turns
//! to get back to the original orientation.
//!
//! | Direction | k |
//! |-----------|---|
//! | Left      | 0 |
//! | Down      | 1 |
//! | Right     | 2 |
//! | Up        | 3 |

use crate::board::Board;
use crate::types::Direction;

/// Rotate `board` so that sliding `direction` becomes sliding left
pub fn normalize(board: &Board, direction: Direction) -> Board {
    board.rotated_cw(direction.quarter_turns())
}

/// Undo [`normalize`] for the same direction
pub fn denormalize(board: &Board, direction: Direction) -> Board {
    board.rotated_cw((4 - direction.quarter_turns()) % 4)
}
