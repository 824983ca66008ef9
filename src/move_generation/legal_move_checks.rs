//! Pawn move legality.
//!
//! `is_legal` is a pure decision table. The order of the checks matters:
//! later rules assume earlier ones already excluded certain shapes (the
//! file-delta check only runs once straight moves onto occupied squares and
//! diagonal moves onto unrelated empty squares have been dismissed).
//!
//! Known quirks that the table keeps:
//! - the intermediate square of a two-rank advance is not inspected;
//! - an en-passant match only requires the destination *file* to be the
//!   vulnerable file, the rank is left to the distance rule.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;

/// Decide whether a pawn of `mover` may go from source to destination.
///
/// `dest_cell` is the current content of the destination and `en_passant`
/// the context left by the previous move.
pub fn is_legal(
    source_file: i8,
    source_rank: i8,
    dest_file: i8,
    dest_rank: i8,
    mover: Color,
    dest_cell: Cell,
    en_passant: EnPassantContext,
) -> bool {
    let diagonal = dest_file != source_file;

    // Pawns never capture straight ahead.
    if !diagonal && !dest_cell.is_empty() {
        return false;
    }

    if diagonal && dest_cell.is_empty() && !en_passant.targets_file(dest_file) {
        return false;
    }

    if diagonal && dest_cell.holds(mover) {
        return false;
    }

    if diagonal && (dest_file - source_file).abs() != 1 {
        return false;
    }

    let advance = (dest_rank - source_rank) * mover.forward();
    if source_rank == mover.start_rank() {
        advance == 1 || advance == 2
    } else {
        advance == 1
    }
}

/// `is_legal` against a live board, for callers holding squares.
#[inline]
pub fn is_legal_on_board(
    board: &Board,
    mv: PawnMove,
    mover: Color,
    en_passant: EnPassantContext,
) -> ChessResult<bool> {
    let dest_cell = board.get_square(mv.to)?;
    Ok(is_legal(
        mv.from.file,
        mv.from.rank,
        mv.to.file,
        mv.to.rank,
        mover,
        dest_cell,
        en_passant,
    ))
}

/// True when a validated move is an en-passant capture: diagonal onto an
/// empty square on the vulnerable file.
#[inline]
pub fn is_en_passant_capture(mv: PawnMove, dest_cell: Cell, en_passant: EnPassantContext) -> bool {
    mv.is_diagonal() && dest_cell.is_empty() && en_passant.targets_file(mv.to.file)
}

/// True when the move is a two-rank advance from the mover's start rank.
#[inline]
pub fn is_double_step(mv: PawnMove, mover: Color) -> bool {
    mv.from.rank == mover.start_rank() && mv.to.rank - mv.from.rank == 2 * mover.forward()
}
