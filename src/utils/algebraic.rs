//! Long algebraic coordinates for squares (`e2`) and pawn moves (`e2e4`).

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{PawnMove, Square};

/// Convert a two-character coordinate such as `"e4"` to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }
    square_from_bytes(bytes[0], bytes[1])
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

/// Convert a square to its two-character coordinate.
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !square.is_on_board() {
        return Err(ChessErrors::OutOfRange(square.file, square.rank));
    }
    let file_char = char::from(b'a' + square.file as u8);
    let rank_char = char::from(b'1' + square.rank as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse exactly `[a-h][1-8][a-h][1-8]`; anything else is rejected.
pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<PawnMove> {
    let invalid = || ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned());

    let bytes = long_algebraic.as_bytes();
    if bytes.len() != 4 {
        return Err(invalid());
    }

    let from = square_from_bytes(bytes[0], bytes[1]).ok_or_else(invalid)?;
    let to = square_from_bytes(bytes[2], bytes[3]).ok_or_else(invalid)?;
    Ok(PawnMove::new(from, to))
}

pub fn move_to_long_algebraic(mv: PawnMove) -> ChessResult<String> {
    Ok(format!(
        "{}{}",
        square_to_algebraic(mv.from)?,
        square_to_algebraic(mv.to)?
    ))
}

fn square_from_bytes(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Square::new((file - b'a') as i8, (rank - b'1') as i8))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match square_to_algebraic(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "({},{})", self.file, self.rank),
        }
    }
}

impl fmt::Display for PawnMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
