/// Core value types shared by the board, validator and controller.
pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

use crate::game_state::chess_rules::{BLACK_START_RANK, WHITE_START_RANK};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

/// Lower-case names used in "No <color> pawn at .." messages.
const COLOR_NAMES: [&str; 2] = ["white", "black"];
/// Capitalized names used in "<Color> Wins!".
const COLOR_DISPLAY_NAMES: [&str; 2] = ["White", "Black"];
/// Board glyphs.
const COLOR_SYMBOLS: [char; 2] = ['W', 'B'];

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        COLOR_NAMES[self.index()]
    }

    #[inline]
    pub const fn display_name(self) -> &'static str {
        COLOR_DISPLAY_NAMES[self.index()]
    }

    #[inline]
    pub const fn symbol(self) -> char {
        COLOR_SYMBOLS[self.index()]
    }

    /// Rank index holding this color's pawns at game start.
    #[inline]
    pub const fn start_rank(self) -> i8 {
        match self {
            Color::White => WHITE_START_RANK,
            Color::Black => BLACK_START_RANK,
        }
    }

    /// Rank delta of a single forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank index that wins the game when reached.
    #[inline]
    pub const fn far_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Contents of one board cell. Pawns carry no identity beyond color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Pawn(Color),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn holds(self, color: Color) -> bool {
        self == Cell::Pawn(color)
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Pawn(color) => color.symbol(),
        }
    }
}

/// Board coordinate. `file` 0..8 is 'a'..'h', `rank` 0..8 is '1'..'8'.
///
/// Components are signed so callers can form off-board neighbours and let
/// the board reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }
}

/// A pawn move from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PawnMove {
    pub from: Square,
    pub to: Square,
}

impl PawnMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.from.file != self.to.file
    }
}

/// Which file, if any, may be captured en passant on this turn only.
///
/// Set after a two-rank advance and overwritten by every following move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnPassantContext {
    pub vulnerable_file: Option<i8>,
}

impl EnPassantContext {
    #[inline]
    pub const fn none() -> Self {
        Self {
            vulnerable_file: None,
        }
    }

    #[inline]
    pub const fn on_file(file: i8) -> Self {
        Self {
            vulnerable_file: Some(file),
        }
    }

    #[inline]
    pub const fn is_active(self) -> bool {
        self.vulnerable_file.is_some()
    }

    #[inline]
    pub fn targets_file(self, file: i8) -> bool {
        self.vulnerable_file == Some(file)
    }
}

/// One side of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
    pub pawns_remaining: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color, pawns_remaining: u8) -> Self {
        Self {
            name: name.into(),
            color,
            pawns_remaining,
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    WhiteWins,
    BlackWins,
    Stalemate,
    PlayerExit,
}

impl GameOverReason {
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameOverReason::WhiteWins,
            Color::Black => GameOverReason::BlackWins,
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOverReason::WhiteWins => Some(Color::White),
            GameOverReason::BlackWins => Some(Color::Black),
            GameOverReason::Stalemate | GameOverReason::PlayerExit => None,
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    AwaitingMove,
    GameOver(GameOverReason),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lookup_tables_line_up() {
        assert_eq!(Color::White.name(), "white");
        assert_eq!(Color::Black.display_name(), "Black");
        assert_eq!(Color::White.symbol(), 'W');
        assert_eq!(Cell::Pawn(Color::Black).symbol(), 'B');
        assert_eq!(Cell::Empty.symbol(), ' ');
    }

    #[test]
    fn forward_direction_points_to_far_rank() {
        for color in Color::ALL {
            let steps = (color.far_rank() - color.start_rank()) / color.forward();
            assert_eq!(steps, 6);
        }
    }

    #[test]
    fn en_passant_context_tracks_single_file() {
        let ep = EnPassantContext::on_file(4);
        assert!(ep.is_active());
        assert!(ep.targets_file(4));
        assert!(!ep.targets_file(3));
        assert!(!EnPassantContext::none().is_active());
    }
}
