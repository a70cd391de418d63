//! Errors reported by the rules engine and its text front-ends.
//!
//! Every variant is recoverable: the engine state is untouched when one is
//! returned, and the caller is expected to re-prompt. Query operations
//! (generation, capture scans, terminal checks) never produce an error.

use thiserror::Error;

use crate::game_state::checkers_types::Square;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckersError {
    /// The requested move breaks a movement or forced-capture rule.
    #[error("illegal move {from} -> {to}: {reason}")]
    IllegalMoveRequested {
        from: Square,
        to: Square,
        reason: &'static str,
    },

    /// Coordinates outside `0..8`.
    #[error("position ({row},{col}) is off the board")]
    InvalidPosition { row: i32, col: i32 },

    /// A capture chain is in progress and the request does not continue it.
    #[error("capture chain in progress at {chained}; {from} -> {to} does not continue it")]
    ChainViolation {
        chained: Square,
        from: Square,
        to: Square,
    },

    #[error("game is already finished")]
    GameFinished,

    #[error("invalid board text: {0}")]
    InvalidBoardText(String),

    #[error("invalid square text: {0}")]
    InvalidSquareText(String),
}
