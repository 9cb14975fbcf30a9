//! Move module - apply one slide direction to a whole board
//!
//! Pure and side-effect free: the input board is never touched, and the
//! outcome carries a freshly built board whether or not anything moved.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::error::CoreError;
use crate::rotate::{denormalize, normalize};
use crate::slide::slide_line;
use crate::types::Direction;

/// Result of sliding a board in one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    /// Sum of the tiles created by merges during this move
    pub score_gained: u64,
    /// Whether any cell differs from the input board
    pub moved: bool,
}

/// Slide every line of `board` toward `direction`
pub fn move_board(board: &Board, direction: Direction) -> MoveOutcome {
    let working = normalize(board, direction);
    let size = working.size();

    let mut cells = Vec::with_capacity(size * size);
    let mut score_gained = 0u64;
    for row in working.rows() {
        let (slid, gained) = slide_line(row);
        cells.extend_from_slice(&slid);
        score_gained = score_gained.saturating_add(gained);
    }

    let slid = Board::from_flat(size, cells);
    let moved = slid != working;

    MoveOutcome {
        board: denormalize(&slid, direction),
        score_gained,
        moved,
    }
}

/// Check if sliding `direction` would change the board
pub fn can_move(board: &Board, direction: Direction) -> bool {
    let working = normalize(board, direction);
    let changed = working.rows().any(|row| slide_line(row).0 != row);
    changed
}

/// Directions that change the board, in [`Direction::ALL`] order
///
/// This is stack-only and does not allocate for the result.
pub fn legal_moves(board: &Board) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}

pub fn has_legal_move(board: &Board) -> bool {
    Direction::ALL.into_iter().any(|dir| can_move(board, dir))
}

/// Parse an externally supplied direction name
pub fn parse_direction(s: &str) -> Result<Direction, CoreError> {
    Direction::from_str(s).ok_or_else(|| CoreError::InvalidDirection(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_TILE;

    fn board(rows: &[[u32; 4]; 4]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_move_left_merges_first_row() {
        let start = board(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let outcome = move_board(&start, Direction::Left);

        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 4);
        assert_eq!(outcome.board.to_rows()[0], vec![4, 0, 0, 0]);
    }

    #[test]
    fn test_move_right() {
        let start = board(&[[2, 2, 4, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]]);
        let outcome = move_board(&start, Direction::Right);

        assert_eq!(outcome.board.to_rows()[0], vec![0, 0, 4, 4]);
        assert_eq!(outcome.board.to_rows()[3], vec![0, 0, 0, 2]);
        assert_eq!(outcome.score_gained, 4);
    }

    #[test]
    fn test_move_up_and_down_work_on_columns() {
        let start = board(&[[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 8]]);

        let up = move_board(&start, Direction::Up).board;
        assert_eq!(
            up.to_rows(),
            vec![
                vec![4, 0, 0, 8],
                vec![4, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );

        let down = move_board(&start, Direction::Down).board;
        assert_eq!(
            down.to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![4, 0, 0, 0],
                vec![4, 0, 0, 8],
            ]
        );
    }

    #[test]
    fn test_noop_move_returns_equal_board() {
        let start = board(&[[2, 4, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let outcome = move_board(&start, Direction::Left);

        assert!(!outcome.moved);
        assert_eq!(outcome.score_gained, 0);
        assert_eq!(outcome.board, start);
    }

    #[test]
    fn test_can_move_agrees_with_move_board() {
        let start = board(&[[2, 4, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        for dir in Direction::ALL {
            assert_eq!(can_move(&start, dir), move_board(&start, dir).moved, "{:?}", dir);
        }
    }

    #[test]
    fn test_legal_moves_on_locked_board() {
        let locked = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(legal_moves(&locked).is_empty());
        assert!(!has_legal_move(&locked));
    }

    #[test]
    fn test_legal_moves_full_board_with_vertical_pair() {
        let full = board(&[[2, 4, 2, 4], [2, 8, 4, 2], [4, 2, 8, 4], [8, 4, 2, 8]]);
        let moves = legal_moves(&full);
        assert_eq!(moves.as_slice(), &[Direction::Up, Direction::Down]);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction("RIGHT"), Ok(Direction::Right));
        assert_eq!(
            parse_direction("diagonal"),
            Err(CoreError::InvalidDirection("diagonal".to_string()))
        );
    }

    #[test]
    fn test_max_tiles_do_not_merge() {
        let start = Board::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]]).unwrap();

        let outcome = move_board(&start, Direction::Left);
        assert!(!outcome.moved);
        assert_eq!(outcome.board, start);
        assert_eq!(outcome.score_gained, 0);
        assert!(!can_move(&start, Direction::Left));
        assert!(can_move(&start, Direction::Down));
    }

    #[test]
    fn test_large_tiles_merge_without_overflow() {
        let half = MAX_TILE / 2;
        let start = Board::from_rows(&[[half; 4]; 4]).unwrap();

        let outcome = move_board(&start, Direction::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.board.to_rows()[3], vec![MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(outcome.score_gained, 8 * u64::from(MAX_TILE));
        assert_eq!(outcome.board.max_tile(), MAX_TILE);
    }
}
