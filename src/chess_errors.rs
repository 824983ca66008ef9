//! Errors used throughout the pawns-only game.
//!
//! `ChessErrors` is the single error type returned by board accessors,
//! position parsing, game-record handling and the console session. Rejected
//! player moves are *not* errors: they are reported as
//! [`Rejection`](crate::game_state::game_controller::Rejection) values so the
//! turn loop can re-prompt without unwinding.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidAlgebraicString`, `InvalidPositionString`, ...)
//!   are recoverable and suitable for presenting to users.
//! - `OutOfRange` signals a defect: input validation should make it
//!   unreachable during a session.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum ChessErrors {
    /// A board coordinate outside `0..8` on either axis.
    ///
    /// Payload: (file_index, rank_index) as given by the caller.
    #[error("coordinate out of range: file {0}, rank {1}")]
    OutOfRange(i8, i8),

    /// A square or move in long algebraic notation failed to parse.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// A pawn FEN string had malformed structure or tokens.
    #[error("invalid position string: {0}")]
    InvalidPositionString(String),

    /// A game record could not be parsed or replayed.
    #[error("invalid game record: {0}")]
    InvalidGameRecord(String),

    /// A move was submitted after the game reached a terminal state.
    #[error("the game is already over")]
    GameAlreadyOver,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
