//! Move-path enumeration for validating generation and apply logic.
//!
//! Finished games are leaves: a winning or stalemating move is counted when
//! it lands exactly on the search depth and has no children otherwise.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::{generate_legal_moves, GeneratedMove};
use crate::move_generation::legal_move_checks::is_double_step;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub double_steps: usize,
    pub wins: usize,
    pub stalemates: usize,
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    for mv in generate_legal_moves(game_state)? {
        perft_recurse(&mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

fn perft_recurse(
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.applied.captured {
            counts.captures += 1;
        }
        if mv.applied.en_passant_square.is_some() {
            counts.captures += 1;
            counts.en_passant += 1;
        }
        if is_double_step(mv.applied.mv, mv.applied.mover) {
            counts.double_steps += 1;
        }
        match mv.status {
            GameStatus::GameOver(GameOverReason::Stalemate) => counts.stalemates += 1,
            GameStatus::GameOver(reason) if reason.winner().is_some() => counts.wins += 1,
            _ => {}
        }

        return Ok(());
    }

    for child in generate_legal_moves(&mv.game_after_move)? {
        perft_recurse(&child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game("w", "b");
        let counts = perft(&game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_from_start_position() {
        let game = GameState::new_game("w", "b");

        let depth_one = perft(&game, 1).expect("perft should run");
        assert_eq!(depth_one.nodes, 16);
        assert_eq!(depth_one.double_steps, 8);
        assert_eq!(depth_one.captures, 0);

        // The armies cannot touch each other within one move pair.
        let depth_two = perft(&game, 2).expect("perft should run");
        assert_eq!(depth_two.nodes, 256);
        assert_eq!(depth_two.double_steps, 128);
        assert_eq!(depth_two.captures, 0);
        assert_eq!(depth_two.wins, 0);
    }

    #[test]
    fn perft_counts_en_passant_and_wins() {
        // White to move may take d6 en passant, which also removes Black's
        // last pawn.
        let game = GameState::from_pfen("8/8/8/3pP3/8/8/8/8 w d", "w", "b")
            .expect("position should parse");
        let counts = perft(&game, 1).expect("perft should run");
        assert_eq!(counts.nodes, 2);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.wins, 1);

        // The win is a leaf; only e5e6 continues.
        let deeper = perft(&game, 2).expect("perft should run");
        assert_eq!(deeper.nodes, 1);
    }
}
