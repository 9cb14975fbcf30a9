//! Game state module - the win/loss/score state machine
//!
//! This module ties together all core components: board, move engine, and tile
//! source. A [`GameState`] is a value: every transition consumes the old state
//! and returns the next one, and a move that changes nothing hands back the
//! very same state.
//!
//! States and transitions:
//!
//! | From   | To     | Trigger |
//! |--------|--------|---------|
//! | Active | Won    | a move creates a 2048 tile |
//! | Active | Over   | board full and no direction changes it |
//! | Won    | Active | [`GameState::keep_playing`] |
//! | any    | Active | restart via [`GameState::initialize`] |

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::error::CoreError;
use crate::moves::{has_legal_move, move_board, parse_direction};
use crate::rng::TileSource;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Direction, STARTING_TILES, WIN_TILE};

/// A tile placed by [`spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Coarse status derived from the `won`/`over` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Won,
    Over,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Won => "won",
            GameStatus::Over => "over",
        }
    }
}

/// Place one tile into a uniformly chosen empty cell
///
/// A full board is returned unchanged with no spawn; that is not an error,
/// the caller's win/loss evaluation decides what a full board means.
pub fn spawn_tile<T>(board: &Board, tiles: &mut T) -> (Board, Option<Spawn>)
where
    T: TileSource + ?Sized,
{
    let empty = board.empty_cells();
    if empty.is_empty() {
        return (board.clone(), None);
    }

    let (row, col) = empty[tiles.pick_cell(empty.len())];
    let value = tiles.pick_value();
    let spawn = Spawn { row, col, value };
    trace!(row, col, value, "spawned tile");

    (board.with_cell(row, col, value), Some(spawn))
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    score: u64,
    won: bool,
    over: bool,
    /// Set once a win has been dismissed; later 2048s no longer stop play.
    win_acknowledged: bool,
}

impl GameState {
    /// Start a new game: empty board of `size` plus two spawned tiles
    pub fn initialize<T>(size: usize, tiles: &mut T) -> Result<Self, CoreError>
    where
        T: TileSource + ?Sized,
    {
        let mut board = Board::new(size)?;
        for _ in 0..STARTING_TILES {
            board = spawn_tile(&board, tiles).0;
        }
        debug!(size, "initialized game");

        Ok(Self {
            board,
            score: 0,
            won: false,
            over: false,
            win_acknowledged: false,
        })
    }

    /// Rebuild a state around an existing board, evaluating won/over
    pub fn from_parts(board: Board, score: u64) -> Self {
        Self::evaluate(board, score, false)
    }

    /// Derive won/over for `board`
    ///
    /// Over needs a full board with no legal move; a full board that can
    /// still merge stays Active.
    fn evaluate(board: Board, score: u64, win_acknowledged: bool) -> Self {
        let won = !win_acknowledged && board.contains(WIN_TILE);
        let over = !won && board.is_full() && !has_legal_move(&board);
        Self {
            board,
            score,
            won,
            over,
            win_acknowledged,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn win_acknowledged(&self) -> bool {
        self.win_acknowledged
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.over {
            GameStatus::Over
        } else {
            GameStatus::Active
        }
    }

    /// Slide in `direction`, then spawn and re-evaluate if anything moved
    ///
    /// Returns `self` untouched when the game is Won or Over, or when the
    /// slide leaves the board as it was. No tile spawns in those cases.
    pub fn apply_move<T>(self, direction: Direction, tiles: &mut T) -> Self
    where
        T: TileSource + ?Sized,
    {
        if self.status() != GameStatus::Active {
            trace!(status = self.status().as_str(), "move ignored");
            return self;
        }

        let outcome = move_board(&self.board, direction);
        if !outcome.moved {
            trace!(direction = direction.as_str(), "move changed nothing");
            return self;
        }

        let (board, _) = spawn_tile(&outcome.board, tiles);
        let score = self.score.saturating_add(outcome.score_gained);
        let next = Self::evaluate(board, score, self.win_acknowledged);

        debug!(
            direction = direction.as_str(),
            gained = outcome.score_gained,
            score,
            "applied move"
        );
        if next.won {
            info!(score, "reached {}", WIN_TILE);
        } else if next.over {
            info!(score, max_tile = next.board.max_tile(), "game over");
        }

        next
    }

    /// [`apply_move`](Self::apply_move) for a direction given by name
    pub fn apply_move_str<T>(self, direction: &str, tiles: &mut T) -> Result<Self, CoreError>
    where
        T: TileSource + ?Sized,
    {
        let direction = parse_direction(direction)?;
        Ok(self.apply_move(direction, tiles))
    }

    /// Dismiss a win and keep the same board and score
    ///
    /// The result is Active, or Over when the winning board is already locked.
    /// States that have not won are returned unchanged.
    pub fn keep_playing(self) -> Self {
        if !self.won {
            return self;
        }
        info!(score = self.score, "continuing after win");
        Self::evaluate(self.board, self.score, true)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        out.board = self.board.to_rows();
        out.score = self.score;
        out.best_score = out.best_score.max(self.score);
        out.won = self.won;
        out.over = self.over;
        out.status = self.status();
        out.max_tile = self.board.max_tile();
        out.empty_cells = self.board.empty_count();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{seeded_rng, ScriptedTiles};

    fn state(rows: &[[Cell; 4]; 4]) -> GameState {
        GameState::from_parts(Board::from_rows(rows).unwrap(), 0)
    }

    #[test]
    fn test_initialize_spawns_two_tiles() {
        let state = GameState::initialize(4, &mut seeded_rng(12345)).unwrap();

        assert_eq!(state.board().size(), 4);
        assert_eq!(state.board().tile_count(), 2);
        assert!(state
            .board()
            .cells()
            .iter()
            .all(|&c| c == 0 || c == 2 || c == 4));
        assert_eq!(state.score(), 0);
        assert!(!state.won());
        assert!(!state.over());
        assert_eq!(state.status(), GameStatus::Active);
    }

    #[test]
    fn test_initialize_rejects_tiny_boards() {
        let mut rng = seeded_rng(1);
        assert_eq!(
            GameState::initialize(1, &mut rng),
            Err(CoreError::InvalidSize { size: 1 })
        );
        assert_eq!(
            GameState::initialize(0, &mut rng),
            Err(CoreError::InvalidSize { size: 0 })
        );
        assert!(GameState::initialize(2, &mut rng).is_ok());
    }

    #[test]
    fn test_initialize_is_deterministic_per_seed() {
        let a = GameState::initialize(4, &mut seeded_rng(99)).unwrap();
        let b = GameState::initialize(4, &mut seeded_rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawn_tile_fills_chosen_empty_cell() {
        let board = Board::from_rows(&[[2u32, 0], [0, 4]]).unwrap();
        let mut tiles = ScriptedTiles::new([(1, 4)]);

        let (next, spawn) = spawn_tile(&board, &mut tiles);

        // Empty cells in row-major order are (0, 1) and (1, 0).
        assert_eq!(spawn, Some(Spawn { row: 1, col: 0, value: 4 }));
        assert_eq!(next.to_rows(), vec![vec![2, 0], vec![4, 4]]);
        assert_eq!(board.tile_count(), 2);
    }

    #[test]
    fn test_spawn_tile_full_board_is_noop() {
        let board = Board::from_rows(&[[2u32, 4], [4, 2]]).unwrap();
        let mut tiles = ScriptedTiles::new([(0, 2)]);

        let (next, spawn) = spawn_tile(&board, &mut tiles);

        assert_eq!(spawn, None);
        assert_eq!(next, board);
        assert_eq!(tiles.remaining(), 1);
    }

    #[test]
    fn test_apply_move_merges_scores_and_spawns() {
        let start = state(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let mut tiles = ScriptedTiles::new([(0, 2)]);

        let next = start.apply_move(Direction::Left, &mut tiles);

        assert_eq!(next.score(), 4);
        assert_eq!(next.board().to_rows()[0], vec![4, 2, 0, 0]);
        assert_eq!(next.board().tile_count(), 2);
        assert_eq!(next.status(), GameStatus::Active);
    }

    #[test]
    fn test_noop_move_returns_same_state_without_spawn() {
        let start = state(&[[2, 4, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let mut tiles = ScriptedTiles::new([(0, 2)]);

        let next = start.clone().apply_move(Direction::Left, &mut tiles);

        assert_eq!(next, start);
        assert_eq!(tiles.remaining(), 1);
    }

    #[test]
    fn test_win_detection_blocks_moves() {
        let start = state(&[[1024, 1024, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]]);
        let mut tiles = ScriptedTiles::new([(0, 2), (0, 2)]);

        let won = start.apply_move(Direction::Left, &mut tiles);
        assert!(won.won());
        assert!(!won.over());
        assert_eq!(won.status(), GameStatus::Won);
        assert_eq!(won.score(), 2048);

        let still = won.clone().apply_move(Direction::Right, &mut tiles);
        assert_eq!(still, won);
    }

    #[test]
    fn test_keep_playing_resumes_without_rewinning() {
        let start = state(&[[1024, 1024, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]]);
        let mut tiles = ScriptedTiles::new([(0, 2), (0, 2)]);

        let won = start.apply_move(Direction::Left, &mut tiles);
        let resumed = won.clone().keep_playing();

        assert_eq!(resumed.status(), GameStatus::Active);
        assert!(resumed.win_acknowledged());
        assert_eq!(resumed.board(), won.board());
        assert_eq!(resumed.score(), won.score());

        let next = resumed.apply_move(Direction::Right, &mut tiles);
        assert!(next.board().contains(2048));
        assert!(!next.won());
        assert_eq!(next.status(), GameStatus::Active);
    }

    #[test]
    fn test_keep_playing_on_locked_win_is_over() {
        let won = state(&[[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(won.status(), GameStatus::Won);

        let resumed = won.keep_playing();
        assert_eq!(resumed.status(), GameStatus::Over);
        assert!(resumed.win_acknowledged());
    }

    #[test]
    fn test_keep_playing_without_win_is_noop() {
        let start = state(&[[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert_eq!(start.clone().keep_playing(), start);
    }

    #[test]
    fn test_loss_when_last_cell_fills_without_moves() {
        let start = state(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [8, 16, 8, 0]]);
        let mut tiles = ScriptedTiles::new([(0, 4)]);

        let next = start.apply_move(Direction::Right, &mut tiles);

        assert_eq!(next.board().to_rows()[3], vec![4, 8, 16, 8]);
        assert!(next.over());
        assert!(!next.won());
        assert_eq!(next.status(), GameStatus::Over);
    }

    #[test]
    fn test_full_board_with_merge_is_not_over() {
        let start = state(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [8, 16, 8, 0]]);
        let mut tiles = ScriptedTiles::new([(0, 2)]);

        let next = start.apply_move(Direction::Right, &mut tiles);

        assert!(next.board().is_full());
        assert!(!next.over());
    }

    #[test]
    fn test_over_state_ignores_moves() {
        let locked = state(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(locked.over());

        let mut rng = seeded_rng(5);
        for dir in Direction::ALL {
            assert_eq!(locked.clone().apply_move(dir, &mut rng), locked);
        }
    }

    #[test]
    fn test_apply_move_str() {
        let start = state(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let mut tiles = ScriptedTiles::default();

        assert_eq!(
            start.clone().apply_move_str("north", &mut tiles),
            Err(CoreError::InvalidDirection("north".to_string()))
        );
        let next = start.apply_move_str("a", &mut tiles).unwrap();
        assert_eq!(next.score(), 4);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut rng = seeded_rng(2024);
        let mut state = GameState::initialize(4, &mut rng).unwrap();

        for step in 0..2000 {
            let dir = Direction::ALL[step % 4];
            let before_score = state.score();
            let before_tiles = state.board().tile_count();

            state = state.apply_move(dir, &mut rng);
            if state.won() {
                state = state.keep_playing();
            }

            assert!(state.score() >= before_score);
            assert!(state.board().tile_count() <= before_tiles + 1);
            assert!(state
                .board()
                .cells()
                .iter()
                .all(|&c| c == 0 || (c >= 2 && c.is_power_of_two())));
            if state.over() {
                break;
            }
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let start = state(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let snap = start.snapshot();

        assert_eq!(snap.size, 4);
        assert_eq!(snap.board[0], vec![2, 2, 0, 0]);
        assert_eq!(snap.empty_cells, 14);
        assert_eq!(snap.max_tile, 2);
        assert_eq!(snap.status, GameStatus::Active);
    }
}
