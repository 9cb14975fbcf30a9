//! Autoplay - drive a session with random legal moves
//!
//! Used by the headless runner and by tests that need whole games played out.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::core::{legal_moves, GameSnapshot, GameStatus, Session, TileSource};

/// Salt mixed into the run seed for the move chooser, so tiles and moves
/// come from independent streams.
pub const CHOOSER_SALT: u64 = 0x2048_2048_2048_2048;

/// Why an autoplay run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Over,
    Won,
    MoveLimit,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutoplayReport {
    pub seed: u64,
    pub moves: u32,
    pub stop: StopReason,
    #[serde(flatten)]
    pub snapshot: GameSnapshot,
}

/// Play until the game ends, a win stops it, or `max_moves` is reached
///
/// `chooser` picks uniformly among the directions that change the board.
pub fn autoplay<T, R>(
    session: &mut Session<T>,
    chooser: &mut R,
    config: &RunConfig,
    seed: u64,
) -> AutoplayReport
where
    T: TileSource,
    R: Rng + ?Sized,
{
    let mut moves = 0u32;

    let stop = loop {
        match session.state().status() {
            GameStatus::Over => break StopReason::Over,
            GameStatus::Won if config.stop_at_win => break StopReason::Won,
            GameStatus::Won => {
                session.keep_playing();
            }
            GameStatus::Active => {}
        }

        if moves >= config.max_moves {
            break StopReason::MoveLimit;
        }

        let legal = legal_moves(session.state().board());
        if legal.is_empty() {
            // Full boards without moves are already Over; this covers a
            // non-full board that somehow cannot move.
            break StopReason::Over;
        }

        let direction = legal[chooser.gen_range(0..legal.len())];
        session.apply_move(direction);
        moves += 1;

        if moves % 1000 == 0 {
            debug!(moves, score = session.state().score(), "autoplay progress");
        }
    };

    info!(
        moves,
        score = session.state().score(),
        max_tile = session.state().board().max_tile(),
        stop = ?stop,
        "autoplay finished"
    );

    AutoplayReport {
        seed,
        moves,
        stop,
        snapshot: session.snapshot(),
    }
}
