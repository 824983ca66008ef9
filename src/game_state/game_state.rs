//! Game model owned by the controller.
//!
//! `GameState` bundles the board, both players, the side to move, the
//! en-passant context left by the previous move and the controller status.
//! There is no global board: every caller holds its own `GameState`, which
//! makes it cheap to clone positions for tests, perft and playouts.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{STARTING_PAWNS, STARTING_POSITION_PFEN};
use crate::game_state::chess_types::*;
use crate::utils::pawn_fen_generator::generate_pfen;
use crate::utils::pawn_fen_parser::parse_pfen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // Indexed by `Color::index`.
    pub players: [Player; 2],

    pub side_to_move: Color,
    pub en_passant: EnPassantContext,
    pub status: GameStatus,

    // Position the game started from and every move applied since.
    pub initial_pfen: String,
    pub first_to_move: Color,
    pub move_history: Vec<PawnMove>,
}

impl GameState {
    /// Standard start: White to move, eight pawns each.
    pub fn new_game(white_name: impl Into<String>, black_name: impl Into<String>) -> Self {
        Self {
            board: Board::starting(),
            players: [
                Player::new(white_name, Color::White, STARTING_PAWNS),
                Player::new(black_name, Color::Black, STARTING_PAWNS),
            ],
            side_to_move: Color::White,
            en_passant: EnPassantContext::none(),
            status: GameStatus::AwaitingMove,
            initial_pfen: STARTING_POSITION_PFEN.to_owned(),
            first_to_move: Color::White,
            move_history: Vec::new(),
        }
    }

    /// Start from a pawn FEN. Pawn counters are taken from the placement.
    pub fn from_pfen(
        pfen: &str,
        white_name: impl Into<String>,
        black_name: impl Into<String>,
    ) -> ChessResult<Self> {
        let position = parse_pfen(pfen)?;
        let white_pawns = position.board.count_pawns(Color::White);
        let black_pawns = position.board.count_pawns(Color::Black);
        let initial_pfen =
            generate_pfen(&position.board, position.side_to_move, position.en_passant);

        Ok(Self {
            board: position.board,
            players: [
                Player::new(white_name, Color::White, white_pawns),
                Player::new(black_name, Color::Black, black_pawns),
            ],
            side_to_move: position.side_to_move,
            en_passant: position.en_passant,
            status: GameStatus::AwaitingMove,
            initial_pfen,
            first_to_move: position.side_to_move,
            move_history: Vec::new(),
        })
    }

    #[inline]
    pub fn get_pfen(&self) -> String {
        generate_pfen(&self.board, self.side_to_move, self.en_passant)
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move)
    }

    #[inline]
    pub fn opponent(&self) -> &Player {
        self.player(self.side_to_move.opposite())
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_PFEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_starts_with_white_and_full_counters() {
        let game = GameState::new_game("Alice", "Bob");
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.current_player().name, "Alice");
        assert_eq!(game.opponent().name, "Bob");
        assert_eq!(game.player(Color::White).pawns_remaining, 8);
        assert_eq!(game.player(Color::Black).pawns_remaining, 8);
        assert!(!game.en_passant.is_active());
        assert_eq!(game.status, GameStatus::AwaitingMove);
        assert_eq!(game.get_pfen(), STARTING_POSITION_PFEN);
    }

    #[test]
    fn from_pfen_counts_pawns_on_the_board() {
        let game = GameState::from_pfen("8/8/8/3pP3/8/8/8/8 w d", "W", "B")
            .expect("position should parse");
        assert_eq!(game.player(Color::White).pawns_remaining, 1);
        assert_eq!(game.player(Color::Black).pawns_remaining, 1);
        assert!(game.en_passant.targets_file(3));
        assert_eq!(game.initial_pfen, "8/8/8/3pP3/8/8/8/8 w d");
    }

    #[test]
    fn standard_pfen_matches_new_game() {
        let parsed = GameState::from_pfen(STARTING_POSITION_PFEN, "a", "b")
            .expect("starting position should parse");
        assert_eq!(parsed, GameState::new_game("a", "b"));
    }
}
