use crate::game_state::chess_types::*;

/// Write a pawn FEN for the given board and turn fields.
pub fn generate_pfen(board: &Board, side_to_move: Color, en_passant: EnPassantContext) -> String {
    let side = match side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant_field = match en_passant.vulnerable_file {
        Some(file) => char::from(b'a' + file as u8).to_string(),
        None => "-".to_owned(),
    };

    format!("{} {} {}", generate_placement(board), side, en_passant_field)
}

fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for (rank, row) in board.rows().iter().enumerate().rev() {
        let mut empty_count = 0u8;

        for cell in row {
            match cell {
                Cell::Empty => empty_count += 1,
                Cell::Pawn(color) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(match color {
                        Color::White => 'P',
                        Color::Black => 'p',
                    });
                }
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}
