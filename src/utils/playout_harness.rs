//! Seeded random playouts for local testing.
//!
//! Plays both sides with uniformly random legal moves through the regular
//! controller, so every step goes through the same validation as console
//! input. Used by tests and benches to exercise long move sequences; it is
//! not an opponent for human play.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    /// `None` when the ply limit was hit or no legal move was generated.
    pub outcome: Option<GameOverReason>,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayoutSeriesStats {
    pub games: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    pub unfinished: u32,
    pub total_plies: u64,
}

impl PlayoutSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} stalemates={} unfinished={} avg_plies={:.2}",
            self.games,
            self.white_wins,
            self.black_wins,
            self.stalemates,
            self.unfinished,
            if self.games == 0 {
                0.0
            } else {
                self.total_plies as f64 / self.games as f64
            }
        )
    }
}

pub fn run_random_playout(initial: &GameState, config: &PlayoutConfig) -> ChessResult<PlayoutResult> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut state = initial.clone();
    let mut played_moves_lan = Vec::new();

    for _ in 0..config.max_plies {
        if state.is_over() {
            break;
        }

        let moves = legal_moves(&state)?;
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };

        state.play_move(mv)?;
        played_moves_lan.push(mv.to_string());
    }

    let outcome = match state.status {
        GameStatus::GameOver(reason) => Some(reason),
        GameStatus::AwaitingMove => None,
    };
    debug!(seed = config.seed, ?outcome, plies = played_moves_lan.len(), "playout finished");

    Ok(PlayoutResult {
        outcome,
        final_state: state,
        played_moves_lan,
    })
}

/// Run `games` playouts from the standard start, seeds `base_seed..`.
pub fn run_playout_series(
    games: u32,
    base_seed: u64,
    max_plies: u16,
) -> ChessResult<PlayoutSeriesStats> {
    let initial = GameState::new_game("White", "Black");
    let mut stats = PlayoutSeriesStats::default();

    for game in 0..games {
        let config = PlayoutConfig {
            max_plies,
            seed: base_seed.wrapping_add(u64::from(game)),
        };
        let result = run_random_playout(&initial, &config)?;

        stats.games += 1;
        stats.total_plies += result.played_moves_lan.len() as u64;
        match result.outcome {
            Some(GameOverReason::WhiteWins) => stats.white_wins += 1,
            Some(GameOverReason::BlackWins) => stats.black_wins += 1,
            Some(GameOverReason::Stalemate) => stats.stalemates += 1,
            Some(GameOverReason::PlayerExit) | None => stats.unfinished += 1,
        }
    }

    Ok(stats)
}
