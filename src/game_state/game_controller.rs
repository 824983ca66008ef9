//! Turn state machine.
//!
//! One call to [`GameState::handle_input`] is one step of the console
//! protocol: it either rejects the input without touching any state, ends
//! the session on `exit`, or applies a validated move and evaluates the
//! terminal conditions. Front ends that are not line-driven can call
//! [`GameState::play_move`] directly and get the same validation.

use std::fmt;

use tracing::{info, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::EXIT_COMMAND;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove};
use crate::move_generation::legal_move_checks::is_legal_on_board;
use crate::utils::algebraic::long_algebraic_to_move;

/// Why an input was refused. The same player is prompted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidInput,
    NoPawnAt { color: Color, square: Square },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InvalidInput => write!(f, "Invalid Input"),
            Rejection::NoPawnAt { color, square } => {
                write!(f, "No {} pawn at {}", color.name(), square)
            }
        }
    }
}

/// Result of one controller step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Rejected(Rejection),
    Exited,
    Moved {
        applied: AppliedMove,
        status: GameStatus,
    },
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::WhiteWins => write!(f, "{} Wins!", Color::White.display_name()),
            GameOverReason::BlackWins => write!(f, "{} Wins!", Color::Black.display_name()),
            GameOverReason::Stalemate => write!(f, "Stalemate!"),
            GameOverReason::PlayerExit => write!(f, "Bye!"),
        }
    }
}

impl GameState {
    /// Process one raw input line (line terminator already stripped).
    pub fn handle_input(&mut self, input: &str) -> ChessResult<TurnOutcome> {
        if self.is_over() {
            return Err(ChessErrors::GameAlreadyOver);
        }

        if input == EXIT_COMMAND {
            self.status = GameStatus::GameOver(GameOverReason::PlayerExit);
            info!(player = %self.current_player().name, "player left the game");
            return Ok(TurnOutcome::Exited);
        }

        match long_algebraic_to_move(input) {
            Ok(mv) => self.play_move(mv),
            Err(_) => {
                trace!(input, "malformed move input");
                Ok(TurnOutcome::Rejected(Rejection::InvalidInput))
            }
        }
    }

    /// Validate and apply `mv` for the side to move.
    ///
    /// Rejections leave the state untouched. `Err` is reserved for defects
    /// (an off-board coordinate) and for moves after the game ended.
    pub fn play_move(&mut self, mv: PawnMove) -> ChessResult<TurnOutcome> {
        if self.is_over() {
            return Err(ChessErrors::GameAlreadyOver);
        }

        let mover = self.side_to_move;
        if !self.board.get_square(mv.from)?.holds(mover) {
            let rejection = Rejection::NoPawnAt {
                color: mover,
                square: mv.from,
            };
            trace!(mv = %mv, %rejection, "move rejected");
            return Ok(TurnOutcome::Rejected(rejection));
        }

        if !is_legal_on_board(&self.board, mv, mover, self.en_passant)? {
            trace!(mv = %mv, en_passant = ?self.en_passant.vulnerable_file, "illegal move");
            return Ok(TurnOutcome::Rejected(Rejection::InvalidInput));
        }

        let applied = apply_move(self, mv)?;
        let status = self.evaluate_status(mv);
        self.status = status;

        match status {
            GameStatus::AwaitingMove => self.side_to_move = mover.opposite(),
            GameStatus::GameOver(reason) => {
                info!(%reason, plies = self.move_history.len(), "game over")
            }
        }

        Ok(TurnOutcome::Moved { applied, status })
    }

    /// Stalemate check for a position loaded from a pawn FEN, before any
    /// move has been evaluated.
    pub fn check_start_stalemate(&mut self) -> GameStatus {
        if !self.is_over() && !self.board.has_any_legal_move(self.side_to_move) {
            self.status = GameStatus::GameOver(GameOverReason::Stalemate);
            info!(side = ?self.side_to_move, "start position is already stalemate");
        }
        self.status
    }

    // Wins are checked before stalemate.
    fn evaluate_status(&self, mv: PawnMove) -> GameStatus {
        let mover = self.side_to_move;
        let enemy = mover.opposite();

        if mv.to.rank == mover.far_rank() || self.player(enemy).pawns_remaining == 0 {
            return GameStatus::GameOver(GameOverReason::win_for(mover));
        }

        if !self.board.has_any_legal_move(enemy) {
            return GameStatus::GameOver(GameOverReason::Stalemate);
        }

        GameStatus::AwaitingMove
    }
}
