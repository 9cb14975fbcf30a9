//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games (for replays and AI training)
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, web, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N×N immutable grid of power-of-two tiles
//! - [`slide`]: single-line slide/merge primitive
//! - [`rotate`]: reduces the four directions to "slide left" by quarter turns
//! - [`moves`]: applies a direction to a whole board and reports the outcome
//! - [`game_state`]: score, win/loss state machine, and tile spawning
//! - [`rng`]: injectable tile source with a seedable default
//! - [`session`]: current game plus best score, restart, and keep-playing
//! - [`snapshot`]: serializable view for front ends
//!
//! # Game Rules
//!
//! - **Sliding**: every tile slides as far as it can toward the chosen edge
//! - **Merging**: two equal neighbours merge once per move, nearest the edge first
//! - **Spawning**: each move that changes the board adds a 2 (90%) or a 4 (10%)
//! - **Winning**: a 2048 tile wins; the player may keep playing afterwards
//! - **Losing**: a full board where no direction changes anything
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{seeded_rng, GameState};
//! use tui_2048_types::Direction;
//!
//! let mut rng = seeded_rng(12345);
//! let mut game = GameState::initialize(4, &mut rng).unwrap();
//! assert_eq!(game.board().tile_count(), 2);
//!
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game = game.apply_move(dir, &mut rng);
//! }
//!
//! assert!(game.board().tile_count() >= 2);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod moves;
pub mod rng;
pub mod rotate;
pub mod session;
pub mod slide;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::CoreError;
pub use game_state::{spawn_tile, GameState, GameStatus, Spawn};
pub use moves::{can_move, has_legal_move, legal_moves, move_board, parse_direction, MoveOutcome};
pub use rng::{entropy_rng, seeded_rng, GameRng, ScriptedTiles, TileSource};
pub use session::Session;
pub use slide::slide_line;
pub use snapshot::GameSnapshot;
