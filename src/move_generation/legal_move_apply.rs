use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_double_step, is_en_passant_capture};

/// What a validated move did to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: PawnMove,
    pub mover: Color,
    /// Destination held an enemy pawn.
    pub captured: bool,
    /// Square of the enemy pawn removed by an en-passant capture.
    pub en_passant_square: Option<Square>,
}

impl AppliedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured || self.en_passant_square.is_some()
    }
}

/// Apply a move that already passed
/// [`is_legal`](crate::move_generation::legal_move_checks::is_legal).
///
/// Updates the board, the pawn counters, the en-passant context and the
/// move history. Does not touch the side to move or the status.
pub fn apply_move(game_state: &mut GameState, mv: PawnMove) -> ChessResult<AppliedMove> {
    let mover = game_state.side_to_move;
    let enemy = mover.opposite();
    let dest_cell = game_state.board.get_square(mv.to)?;
    let en_passant_capture = is_en_passant_capture(mv, dest_cell, game_state.en_passant);

    let captured = !dest_cell.is_empty();
    if captured {
        let opponent = game_state.player_mut(enemy);
        opponent.pawns_remaining = opponent.pawns_remaining.saturating_sub(1);
    }

    game_state
        .board
        .move_pawn(mv.from.file, mv.from.rank, mv.to.file, mv.to.rank, mover)?;

    let mut en_passant_square = None;
    if en_passant_capture {
        // The captured pawn sits one rank behind the destination.
        // The square is cleared whatever it holds, but only an enemy pawn
        // counts as a capture.
        let behind = Square::new(mv.to.file, mv.to.rank - mover.forward());
        let cleared = game_state.board.get_square(behind)?;
        if let Cell::Pawn(owner) = cleared {
            let victim = game_state.player_mut(owner);
            victim.pawns_remaining = victim.pawns_remaining.saturating_sub(1);
        }
        game_state.board.clear(behind.file, behind.rank)?;
        if cleared.holds(enemy) {
            en_passant_square = Some(behind);
            debug!(mover = ?mover, mv = %mv, captured = %behind, "en passant capture");
        } else {
            debug!(mover = ?mover, mv = %mv, cleared = %behind, "en passant cleared no enemy pawn");
        }
    }

    game_state.en_passant = if is_double_step(mv, mover) {
        EnPassantContext::on_file(mv.from.file)
    } else {
        EnPassantContext::none()
    };
    game_state.move_history.push(mv);

    debug!(
        mover = ?mover,
        mv = %mv,
        captured,
        en_passant = ?game_state.en_passant.vulnerable_file,
        "applied move"
    );

    Ok(AppliedMove {
        mv,
        mover,
        captured,
        en_passant_square,
    })
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::utils::algebraic::long_algebraic_to_move;

    fn mv(text: &str) -> PawnMove {
        long_algebraic_to_move(text).expect("move should parse")
    }

    #[test]
    fn double_step_opens_en_passant_on_source_file() {
        let mut game = GameState::new_game("w", "b");
        let applied = apply_move(&mut game, mv("e2e4")).expect("move should apply");
        assert!(!applied.is_capture());
        assert!(game.en_passant.targets_file(4));
        assert_eq!(game.move_history, vec![mv("e2e4")]);
    }

    #[test]
    fn single_step_clears_en_passant() {
        let mut game = GameState::from_pfen("8/pppppppp/8/8/8/8/PPPPPPPP/8 w e", "w", "b")
            .expect("position should parse");
        apply_move(&mut game, mv("a2a3")).expect("move should apply");
        assert!(!game.en_passant.is_active());
    }

    #[test]
    fn ordinary_capture_decrements_opponent() {
        let mut game = GameState::from_pfen("8/8/8/3p4/4P3/8/8/8 w -", "w", "b")
            .expect("position should parse");
        let applied = apply_move(&mut game, mv("e4d5")).expect("move should apply");
        assert!(applied.captured);
        assert_eq!(game.player(Color::Black).pawns_remaining, 0);
        assert_eq!(game.player(Color::White).pawns_remaining, 1);
        assert_eq!(
            game.board.get(3, 4).expect("on board"),
            Cell::Pawn(Color::White)
        );
    }

    #[test]
    fn en_passant_removes_pawn_behind_destination() {
        let mut game = GameState::from_pfen("8/8/8/8/3pP3/8/8/8 b e", "w", "b")
            .expect("position should parse");
        let applied = apply_move(&mut game, mv("d4e3")).expect("move should apply");
        assert!(!applied.captured);
        assert_eq!(applied.en_passant_square, Some(Square::new(4, 3)));
        assert!(game.board.get(4, 3).expect("on board").is_empty());
        assert_eq!(
            game.board.get(4, 2).expect("on board"),
            Cell::Pawn(Color::Black)
        );
        assert_eq!(game.player(Color::White).pawns_remaining, 0);
    }

    #[test]
    fn en_passant_on_own_pawn_clears_it_without_counting_a_capture() {
        // The vulnerable file matches but d2 holds White's own pawn.
        let mut game = GameState::from_pfen("8/8/8/3p4/8/8/2PP4/8 w d", "w", "b")
            .expect("position should parse");
        let applied = apply_move(&mut game, mv("c2d3")).expect("move should apply");
        assert!(!applied.is_capture());
        assert_eq!(applied.en_passant_square, None);
        assert!(game.board.get(3, 1).expect("on board").is_empty());
        assert_eq!(
            game.board.get(3, 2).expect("on board"),
            Cell::Pawn(Color::White)
        );
        assert_eq!(game.player(Color::White).pawns_remaining, 1);
        assert_eq!(game.player(Color::Black).pawns_remaining, 1);
    }

    #[test]
    fn en_passant_onto_empty_rank_reports_no_capture() {
        let mut game = GameState::from_pfen("8/8/8/8/8/8/2P5/8 w d", "w", "b")
            .expect("position should parse");
        let applied = apply_move(&mut game, mv("c2d3")).expect("move should apply");
        assert!(!applied.is_capture());
        assert_eq!(game.player(Color::White).pawns_remaining, 1);
    }
}
