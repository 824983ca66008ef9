//! Crate root module declarations for the pawns-only chess game.
//!
//! Exposes the board model and turn controller, pawn move validation and
//! generation, the console front-end, and text utilities (notation, pawn
//! FEN, rendering, game records, random playouts) so the binary, tests and
//! benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_controller;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod console {
    pub mod cli_args;
    pub mod console_loop;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_record;
    pub mod pawn_fen_generator;
    pub mod pawn_fen_parser;
    pub mod playout_harness;
    pub mod render_game_state;
}
