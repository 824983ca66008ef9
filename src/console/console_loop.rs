//! Interactive console front-end.
//!
//! Prompts for both player names, prints the board, then alternates turns
//! until a win, a stalemate, `exit`, or the end of the input stream. The
//! loop owns no game rules: every line goes to
//! [`GameState::handle_input`] and the outcome is printed.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::chess_errors::ChessResult;
use crate::console::session_config::SessionConfig;
use crate::game_state::game_controller::TurnOutcome;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::game_record::write_game_record;

const TITLE: &str = "Pawns-Only Chess";
const FAREWELL: &str = "Bye!";

pub fn run_stdio_session(config: &SessionConfig) -> ChessResult<GameState> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout, config)
}

/// Run one session over any line source and sink. Returns the final state.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    config: &SessionConfig,
) -> ChessResult<GameState> {
    if config.show_banner {
        writeln!(out, "{TITLE}")?;
    }

    writeln!(out, "First player's name:")?;
    out.flush()?;
    let white_name = read_line(&mut input)?.unwrap_or_default();
    writeln!(out, "Second player's name:")?;
    out.flush()?;
    let black_name = read_line(&mut input)?.unwrap_or_default();

    let mut game = match &config.start_position {
        Some(pfen) => GameState::from_pfen(pfen, white_name, black_name)?,
        None => GameState::new_game(white_name, black_name),
    };
    write!(out, "{}", game.board.render())?;

    if config.start_position.is_some() {
        if let GameStatus::GameOver(reason) = game.check_start_stalemate() {
            writeln!(out, "{reason}")?;
            writeln!(out, "{FAREWELL}")?;
        }
    }

    while !game.is_over() {
        writeln!(out, "{}'s turn:", game.current_player().name)?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            warn!("input closed before the game ended");
            break;
        };

        match game.handle_input(&line)? {
            TurnOutcome::Rejected(rejection) => writeln!(out, "{rejection}")?,
            TurnOutcome::Exited => writeln!(out, "{FAREWELL}")?,
            TurnOutcome::Moved { status, .. } => {
                write!(out, "{}", game.board.render())?;
                if let GameStatus::GameOver(reason) = status {
                    writeln!(out, "{reason}")?;
                    writeln!(out, "{FAREWELL}")?;
                }
            }
        }
    }

    if config.print_record {
        write!(out, "{}", write_game_record(&game))?;
    }
    out.flush()?;

    debug!(status = ?game.status, plies = game.move_history.len(), "session finished");
    Ok(game)
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> ChessResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let content_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(content_len);
    Ok(Some(line))
}
