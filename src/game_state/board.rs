//! 8×8 pawn board.
//!
//! `Board` is plain data plus range-checked accessors. It never decides
//! legality on its own: callers validate a move with
//! [`is_legal`](crate::move_generation::legal_move_checks::is_legal) before
//! calling [`Board::move_pawn`].

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    // [rank][file]
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Board with no pawns.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard layout: eight White pawns on rank index 1, eight Black on 6.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for color in Color::ALL {
            board.cells[color.start_rank() as usize] = [Cell::Pawn(color); 8];
        }
        board
    }

    pub fn get(&self, file: i8, rank: i8) -> ChessResult<Cell> {
        check_range(file, rank)?;
        Ok(self.cells[rank as usize][file as usize])
    }

    #[inline]
    pub fn get_square(&self, square: Square) -> ChessResult<Cell> {
        self.get(square.file, square.rank)
    }

    pub fn set(&mut self, file: i8, rank: i8, cell: Cell) -> ChessResult<()> {
        check_range(file, rank)?;
        self.cells[rank as usize][file as usize] = cell;
        Ok(())
    }

    #[inline]
    pub fn clear(&mut self, file: i8, rank: i8) -> ChessResult<()> {
        self.set(file, rank, Cell::Empty)
    }

    /// Clears the source and writes a `color` pawn to the destination,
    /// overwriting whatever stood there. No legality checks.
    pub fn move_pawn(
        &mut self,
        source_file: i8,
        source_rank: i8,
        dest_file: i8,
        dest_rank: i8,
        color: Color,
    ) -> ChessResult<()> {
        check_range(source_file, source_rank)?;
        check_range(dest_file, dest_rank)?;
        self.clear(source_file, source_rank)?;
        self.set(dest_file, dest_rank, Cell::Pawn(color))
    }

    /// Whether any `color` pawn has a single-step advance or a diagonal
    /// capture against the current board. En passant is not considered.
    ///
    /// The two back ranks are skipped: a pawn can never stand on its own
    /// back rank, and one on the far rank has already won.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        let enemy = Cell::Pawn(color.opposite());
        let step = color.forward();

        for rank in 1..BOARD_SIZE - 1 {
            let ahead = rank + step;
            for file in 0..BOARD_SIZE {
                if self.cell(file, rank) != Cell::Pawn(color) {
                    continue;
                }
                if self.cell(file, ahead).is_empty()
                    || (file > 0 && self.cell(file - 1, ahead) == enemy)
                    || (file < BOARD_SIZE - 1 && self.cell(file + 1, ahead) == enemy)
                {
                    return true;
                }
            }
        }

        false
    }

    /// Number of `color` pawns currently on the board.
    pub fn count_pawns(&self, color: Color) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.holds(color))
            .count() as u8
    }

    /// Squares holding a `color` pawn, rank-major from rank index 0.
    pub fn pawn_squares(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..BOARD_SIZE).flat_map(move |rank| {
            (0..BOARD_SIZE)
                .filter(move |&file| self.cell(file, rank).holds(color))
                .map(move |file| Square::new(file, rank))
        })
    }

    /// Cells indexed `[rank][file]`.
    #[inline]
    pub fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Fixed-format text grid, ranks 8 down to 1.
    #[inline]
    pub fn render(&self) -> String {
        render_board(self)
    }

    // Caller guarantees the coordinate is on the board.
    #[inline]
    fn cell(&self, file: i8, rank: i8) -> Cell {
        self.cells[rank as usize][file as usize]
    }
}

#[inline]
fn check_range(file: i8, rank: i8) -> ChessResult<()> {
    if Square::new(file, rank).is_on_board() {
        Ok(())
    } else {
        Err(ChessErrors::OutOfRange(file, rank))
    }
}
