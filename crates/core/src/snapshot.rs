use serde::{Deserialize, Serialize};

use crate::game_state::GameStatus;
use crate::types::{Cell, DEFAULT_BOARD_SIZE};

/// Render-agnostic view of a game, for front ends and the runner's JSON output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: usize,
    pub board: Vec<Vec<Cell>>,
    pub score: u64,
    pub best_score: u64,
    pub won: bool,
    pub over: bool,
    pub status: GameStatus,
    pub max_tile: Cell,
    pub empty_cells: usize,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = DEFAULT_BOARD_SIZE;
        self.board = vec![vec![0; DEFAULT_BOARD_SIZE]; DEFAULT_BOARD_SIZE];
        self.score = 0;
        self.best_score = 0;
        self.won = false;
        self.over = false;
        self.status = GameStatus::Active;
        self.max_tile = 0;
        self.empty_cells = DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE;
    }

    /// Whether a move could still be applied
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Active
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: 0,
            board: Vec::new(),
            score: 0,
            best_score: 0,
            won: false,
            over: false,
            status: GameStatus::Active,
            max_tile: 0,
            empty_cells: 0,
        };
        s.clear();
        s
    }
}
