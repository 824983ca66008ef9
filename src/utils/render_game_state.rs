//! Terminal board renderer.
//!
//! Produces the fixed grid printed by the console session after every
//! successful move.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;

const FILE_LABELS: &str = "   a   b   c   d   e   f   g   h";

/// Render the board, ranks 8 down to 1, each row between separator lines.
///
/// The returned string ends with a newline after the file labels.
pub fn render_board(board: &Board) -> String {
    let separator = separator_line();
    let mut out = String::new();

    for (rank, row) in board.rows().iter().enumerate().rev() {
        out.push_str(&separator);
        out.push('\n');
        out.push(char::from(b'1' + rank as u8));
        out.push_str(" |");
        for cell in row {
            out.push(' ');
            out.push(cell.symbol());
            out.push_str(" |");
        }
        out.push('\n');
    }

    out.push_str(&separator);
    out.push('\n');
    out.push_str(FILE_LABELS);
    out.push('\n');

    out
}

fn separator_line() -> String {
    let mut line = String::from("  +");
    for _ in 0..BOARD_SIZE {
        line.push_str("---+");
    }
    line
}
