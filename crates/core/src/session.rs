//! Session module - one player's run of games
//!
//! A session owns the current [`GameState`], the tile source feeding it, and
//! the best score seen across every game it has played. Front ends hold one
//! session and feed it [`GameAction`]s; persisting the best score between
//! processes is left to them.

use tracing::info;

use crate::error::CoreError;
use crate::game_state::GameState;
use crate::rng::TileSource;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction};

#[derive(Debug, Clone)]
pub struct Session<T> {
    size: usize,
    state: GameState,
    best_score: u64,
    /// Games started so far, including the current one
    games_played: u32,
    tiles: T,
}

impl<T: TileSource> Session<T> {
    pub fn new(size: usize, mut tiles: T) -> Result<Self, CoreError> {
        let state = GameState::initialize(size, &mut tiles)?;
        Ok(Self {
            size,
            state,
            best_score: 0,
            games_played: 1,
            tiles,
        })
    }

    /// Seed the best score from a value the caller persisted earlier
    pub fn with_best_score(mut self, best_score: u64) -> Self {
        self.best_score = self.best_score.max(best_score);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Apply a move to the current game; returns true if the state changed
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let before = self.state.clone();
        let next = std::mem::replace(&mut self.state, before)
            .apply_move(direction, &mut self.tiles);
        let changed = next != self.state;
        self.state = next;
        self.record_score();
        changed
    }

    /// Dismiss a win; returns true if there was one to dismiss
    pub fn keep_playing(&mut self) -> bool {
        if !self.state.won() {
            return false;
        }
        self.state = self.state.clone().keep_playing();
        true
    }

    /// Throw the current game away and start a fresh one of the same size
    pub fn restart(&mut self) -> Result<(), CoreError> {
        self.record_score();
        self.state = GameState::initialize(self.size, &mut self.tiles)?;
        self.games_played = self.games_played.saturating_add(1);
        info!(
            games_played = self.games_played,
            best_score = self.best_score,
            "restarted"
        );
        Ok(())
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, CoreError> {
        match action {
            GameAction::Move(direction) => Ok(self.apply_move(direction)),
            GameAction::KeepPlaying => Ok(self.keep_playing()),
            GameAction::Restart => {
                self.restart()?;
                Ok(true)
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
        out.best_score = self.best_score;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn record_score(&mut self) {
        self.best_score = self.best_score.max(self.state.score());
    }
}
