//! Legal move enumeration for the side to move.
//!
//! Candidates are the forward shapes a pawn can ever make (one or two ranks
//! ahead on its own or an adjacent file); each is kept only if
//! [`is_legal`](crate::move_generation::legal_move_checks::is_legal) accepts
//! it, so the generator inherits every rule of the validator, en passant
//! included.

use crate::chess_errors::ChessResult;
use crate::game_state::game_controller::TurnOutcome;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::move_generation::legal_move_checks::is_legal_on_board;

const FILE_DELTAS: [i8; 3] = [-1, 0, 1];
const RANK_STEPS: [i8; 2] = [1, 2];

/// A legal move together with the position it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub applied: AppliedMove,
    pub status: GameStatus,
    pub game_after_move: GameState,
}

/// All legal moves for the side to move, in board order. Empty once the
/// game is over.
pub fn legal_moves(game_state: &GameState) -> ChessResult<Vec<PawnMove>> {
    if game_state.is_over() {
        return Ok(Vec::new());
    }

    let mover = game_state.side_to_move;
    let mut out = Vec::with_capacity(24);

    for from in game_state.board.pawn_squares(mover) {
        for steps in RANK_STEPS {
            for file_delta in FILE_DELTAS {
                let to = Square::new(from.file + file_delta, from.rank + steps * mover.forward());
                if !to.is_on_board() {
                    continue;
                }
                let mv = PawnMove::new(from, to);
                if is_legal_on_board(&game_state.board, mv, mover, game_state.en_passant)? {
                    out.push(mv);
                }
            }
        }
    }

    Ok(out)
}

/// Legal moves with their successor positions.
pub fn generate_legal_moves(game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
    let moves = legal_moves(game_state)?;
    let mut generated = Vec::with_capacity(moves.len());

    for mv in moves {
        let mut next = game_state.clone();
        if let TurnOutcome::Moved { applied, status } = next.play_move(mv)? {
            generated.push(GeneratedMove {
                applied,
                status,
                game_after_move: next,
            });
        }
    }

    Ok(generated)
}
