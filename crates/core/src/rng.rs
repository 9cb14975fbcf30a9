//! RNG module - where spawned tiles come from
//!
//! The game state never reaches for an ambient random source. Spawning asks a
//! [`TileSource`] for two things: which empty cell to use, and which value to
//! put there. Any `rand::Rng` is a tile source, so production code can pass a
//! seeded [`GameRng`] and replay a game exactly from its seed.
//!
//! Also provides [`ScriptedTiles`] for tests that need to pin exact spawns.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{Cell, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE, SPAWN_TWO_PROBABILITY};

/// Default seedable generator used by sessions and the runner
pub type GameRng = ChaCha8Rng;

/// Create a deterministic generator from a seed
pub fn seeded_rng(seed: u64) -> GameRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Create a generator seeded from the operating system
pub fn entropy_rng() -> GameRng {
    ChaCha8Rng::from_entropy()
}

/// Source of randomness for tile spawns
pub trait TileSource {
    /// Uniform index in `[0, count)`; only called with `count > 0`
    fn pick_cell(&mut self, count: usize) -> usize;

    /// Value of the spawned tile: 2 with probability 0.9, otherwise 4
    fn pick_value(&mut self) -> Cell;
}

impl<R: Rng + ?Sized> TileSource for R {
    fn pick_cell(&mut self, count: usize) -> usize {
        self.gen_range(0..count)
    }

    fn pick_value(&mut self) -> Cell {
        if self.gen_bool(SPAWN_TWO_PROBABILITY) {
            SPAWN_LOW_VALUE
        } else {
            SPAWN_HIGH_VALUE
        }
    }
}

/// Tile source that replays a fixed list of `(cell index, value)` picks
///
/// Indices are taken modulo the number of empty cells. Once the script runs
/// out, every spawn goes to the first empty cell with value 2.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTiles {
    picks: VecDeque<(usize, Cell)>,
    pending_value: Option<Cell>,
}

impl ScriptedTiles {
    pub fn new(picks: impl IntoIterator<Item = (usize, Cell)>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            pending_value: None,
        }
    }

    /// Picks not yet consumed
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl TileSource for ScriptedTiles {
    fn pick_cell(&mut self, count: usize) -> usize {
        match self.picks.pop_front() {
            Some((index, value)) => {
                self.pending_value = Some(value);
                index % count
            }
            None => {
                self.pending_value = None;
                0
            }
        }
    }

    fn pick_value(&mut self) -> Cell {
        self.pending_value.take().unwrap_or(SPAWN_LOW_VALUE)
    }
}
