//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, headless runner, front ends).
//!
//! # Board Dimensions
//!
//! The board is a square N×N grid:
//!
//! - **Default size**: 4×4 (indexed 0-3 on both axes)
//! - **Minimum size**: 2×2 (a 1×1 board admits no legal move)
//! - **Coordinates**: `(row, col)`, row 0 at the top, col 0 on the left
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Board edge length used by a fresh game |
//! | `MIN_BOARD_SIZE` | 2 | Smallest accepted board edge length |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `MAX_TILE` | 2^30 | Largest tile a cell may hold; it never merges further |
//! | `STARTING_TILES` | 2 | Tiles spawned by a new game |
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance a spawned tile is a 2 (otherwise 4) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_BOARD_SIZE, WIN_TILE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Directions map onto clockwise quarter turns of the board
//! assert_eq!(Direction::Up.quarter_turns(), 3);
//!
//! // Parse game action
//! let action = GameAction::from_str("keepPlaying").unwrap();
//! assert_eq!(action, GameAction::KeepPlaying);
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Board edge length of a standard game (4x4)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest board edge length the engine accepts
pub const MIN_BOARD_SIZE: usize = 2;

/// Reaching a tile of this value wins the game
pub const WIN_TILE: Cell = 2048;

/// Largest tile value a cell may hold
///
/// Boards are rejected if they carry anything bigger, and two `MAX_TILE`
/// tiles do not merge, so a merge can never overflow a [`Cell`].
pub const MAX_TILE: Cell = 1 << 30;

/// Number of tiles placed on an empty board when a game starts
pub const STARTING_TILES: usize = 2;

/// Probability that a spawned tile is a 2
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Value of the common spawned tile
pub const SPAWN_LOW_VALUE: Cell = 2;

/// Value of the rare spawned tile
pub const SPAWN_HIGH_VALUE: Cell = 4;


/// A cell on the game board
///
/// - `0`: Empty cell
/// - `2^k` (1 <= k <= 30): Tile of that value, at most [`MAX_TILE`]
///
/// Used by the board as a flat row-major array of cells.
pub type Cell = u32;

/// Slide directions
///
/// Each direction is handled by rotating the board a number of clockwise
/// quarter turns, sliding every row left, and rotating back:
///
/// | Direction | Quarter turns |
/// |-----------|---------------|
/// | Left      | 0 |
/// | Down      | 1 |
/// | Right     | 2 |
/// | Up        | 3 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Number of clockwise quarter turns that brings this direction to `Left`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Left.quarter_turns(), 0);
    /// assert_eq!(Direction::Down.quarter_turns(), 1);
    /// assert_eq!(Direction::Right.quarter_turns(), 2);
    /// assert_eq!(Direction::Up.quarter_turns(), 3);
    /// ```
    pub fn quarter_turns(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names and WASD keys:
    /// "up" | "w", "down" | "s", "left" | "a", "right" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("W"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("a"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Actions a caller can apply to a running session
///
/// Moves come from whatever input layer the caller has; the other two are
/// the "Keep Playing" and "New Game" buttons of a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Dismiss the win and continue on the same board
    KeepPlaying,
    /// Start a new game (when game over or at any time)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Direction names parse to [`GameAction::Move`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("keepplaying"), Some(GameAction::KeepPlaying));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keepplaying" | "continue" => Some(GameAction::KeepPlaying),
            "restart" | "new" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::KeepPlaying => "keepPlaying",
            GameAction::Restart => "restart",
        }
    }
}
