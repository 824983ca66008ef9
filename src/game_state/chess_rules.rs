//! Canonical rule constants for pawns-only chess.

/// Board edge length.
pub const BOARD_SIZE: i8 = 8;

/// Pawns each side starts with.
pub const STARTING_PAWNS: u8 = 8;

/// Rank index of the White pawn row at game start.
pub const WHITE_START_RANK: i8 = 1;

/// Rank index of the Black pawn row at game start.
pub const BLACK_START_RANK: i8 = 6;

/// Starting position in pawn FEN (see `utils::pawn_fen_parser`).
pub const STARTING_POSITION_PFEN: &str = "8/pppppppp/8/8/8/8/PPPPPPPP/8 w -";

/// Literal console command that ends the session.
pub const EXIT_COMMAND: &str = "exit";
