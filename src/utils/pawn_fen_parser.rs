//! Pawn FEN parser.
//!
//! A pawn FEN has three space-separated fields:
//! `<placement> <side> <en-passant file>`, for example
//! `8/pppppppp/8/8/8/8/PPPPPPPP/8 w -`. Placement lists ranks 8 down to 1
//! with `P` for White, `p` for Black and digits for runs of empty cells.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

/// Board plus the turn fields of a pawn FEN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PawnPosition {
    pub board: Board,
    pub side_to_move: Color,
    pub en_passant: EnPassantContext,
}

pub fn parse_pfen(pfen: &str) -> ChessResult<PawnPosition> {
    let mut parts = pfen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing placement"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| invalid("missing en-passant file"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    Ok(PawnPosition {
        board: parse_board_placement(board_part)?,
        side_to_move: parse_side_to_move(side_part)?,
        en_passant: parse_en_passant_file(en_passant_part)?,
    })
}

/// Parse only the placement field.
pub fn parse_board_placement(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("placement must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (pfen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - pfen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-cell count '{ch}'")));
                }
                let empty_count = empty_count as i8;
                if file + empty_count > 8 {
                    return Err(invalid("rank has too many files"));
                }
                file += empty_count;
                continue;
            }

            let color = match ch {
                'P' => Color::White,
                'p' => Color::Black,
                _ => return Err(invalid(&format!("unknown placement character '{ch}'"))),
            };
            if file >= 8 {
                return Err(invalid("rank has too many files"));
            }
            if rank == 0 || rank == 7 {
                return Err(invalid("pawns cannot stand on the back ranks"));
            }

            board.set(file, rank, Cell::Pawn(color))?;
            file += 1;
        }

        if file != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side to move '{side_part}'"))),
    }
}

fn parse_en_passant_file(en_passant_part: &str) -> ChessResult<EnPassantContext> {
    match en_passant_part.as_bytes() {
        [b'-'] => Ok(EnPassantContext::none()),
        [file @ b'a'..=b'h'] => Ok(EnPassantContext::on_file((file - b'a') as i8)),
        _ => Err(invalid(&format!("en-passant file '{en_passant_part}'"))),
    }
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidPositionString(reason.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_PFEN;

    #[test]
    fn starting_position_parses_to_starting_board() {
        let position = parse_pfen(STARTING_POSITION_PFEN).expect("start should parse");
        assert_eq!(position.board, Board::starting());
        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.en_passant, EnPassantContext::none());
    }

    #[test]
    fn en_passant_file_and_side_are_read() {
        let position = parse_pfen("8/8/8/8/4P3/8/8/8 b e").expect("position should parse");
        assert_eq!(position.side_to_move, Color::Black);
        assert!(position.en_passant.targets_file(4));
        assert_eq!(
            position.board.get(4, 3).expect("on board"),
            Cell::Pawn(Color::White)
        );
    }

    #[test]
    fn malformed_positions_are_rejected() {
        for pfen in [
            "",
            "8/8/8/8/8/8/8 w -",
            "8/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/8 w",
            "8/8/8/8/8/8/8/8 x -",
            "8/8/8/8/8/8/8/8 w i",
            "8/8/8/8/8/8/8/8 w - extra",
            "8/8/8/8/8/8/8/7 w -",
            "8/8/8/8/8/8/8/9 w -",
            "8/8/8/8/8/8/PPPPPPPPP/8 w -",
            "8/8/8/8/8/8/N7/8 w -",
            "P7/8/8/8/8/8/8/8 w -",
            "8/8/8/8/8/8/8/p7 w -",
            "8/8/8/8/8/8/8/8888888888888888 w -",
            "8/8/8/8/8/8/44444444/8 w -",
            "8/8/8/8/8/8/P8/8 w -",
        ] {
            assert!(
                matches!(parse_pfen(pfen), Err(ChessErrors::InvalidPositionString(_))),
                "{pfen:?} should be rejected"
            );
        }
    }
}
