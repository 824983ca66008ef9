//! Game record read/write.
//!
//! Serializes a finished or running game as PGN-style text: bracketed
//! headers followed by numbered long-algebraic pawn moves and a result
//! token. Reading replays every move through the controller, so a record
//! with an illegal move is refused.

use std::collections::BTreeMap;

use chrono::Local;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_PFEN;
use crate::game_state::game_controller::TurnOutcome;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::long_algebraic_to_move;

const EVENT_NAME: &str = "Pawns-Only Chess Game";

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub move_history: Vec<PawnMove>,
    pub final_state: GameState,
    pub result: String,
}

/// Result token for a game status.
pub fn result_token(status: GameStatus) -> &'static str {
    match status {
        GameStatus::GameOver(GameOverReason::WhiteWins) => "1-0",
        GameStatus::GameOver(GameOverReason::BlackWins) => "0-1",
        GameStatus::GameOver(GameOverReason::Stalemate) => "1/2-1/2",
        GameStatus::GameOver(GameOverReason::PlayerExit) | GameStatus::AwaitingMove => "*",
    }
}

/// Write a record of `game_state` dated today.
pub fn write_game_record(game_state: &GameState) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), EVENT_NAME.to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert(
        "White".to_owned(),
        game_state.player(Color::White).name.clone(),
    );
    headers.insert(
        "Black".to_owned(),
        game_state.player(Color::Black).name.clone(),
    );
    headers.insert(
        "Result".to_owned(),
        result_token(game_state.status).to_owned(),
    );
    if game_state.initial_pfen != STARTING_POSITION_PFEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("PFEN".to_owned(), game_state.initial_pfen.clone());
    }

    write_game_record_with_headers(game_state.first_to_move, &game_state.move_history, &headers)
}

/// Numbered movetext. A game opened by Black starts with `1...`.
pub fn write_game_record_with_headers(
    first_to_move: Color,
    move_history: &[PawnMove],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    let offset = first_to_move.index();
    for (ply, mv) in move_history.iter().enumerate() {
        let half_move = ply + offset;
        if ply == 0 && first_to_move == Color::Black {
            movetext_parts.push(format!("1... {mv}"));
        } else if half_move % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (half_move / 2) + 1, mv));
        } else {
            movetext_parts.push(mv.to_string());
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

pub fn read_game_record(text: &str) -> ChessResult<GameRecord> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<&str>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed);
        }
    }

    let white = headers.get("White").cloned().unwrap_or_default();
    let black = headers.get("Black").cloned().unwrap_or_default();
    let initial_state = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let pfen = headers
            .get("PFEN")
            .ok_or_else(|| invalid("SetUp is present but PFEN header is missing"))?;
        GameState::from_pfen(pfen, white, black)?
    } else {
        GameState::new_game(white, black)
    };

    let mut state = initial_state.clone();
    let mut result = "*".to_owned();

    for token in movetext_lines.join(" ").split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }

        let mv = long_algebraic_to_move(token)?;
        match state.play_move(mv)? {
            TurnOutcome::Moved { .. } => {}
            other => return Err(invalid(&format!("move {token} was not played: {other:?}"))),
        }
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(GameRecord {
        headers,
        move_history: state.move_history.clone(),
        initial_state,
        final_state: state,
        result,
    })
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(invalid(&format!("header line {line}")));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| invalid(&format!("header key {line}")))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| invalid(&format!("header value {line}")))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(invalid(&format!("unquoted header value {line}")));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn is_move_number_token(token: &str) -> bool {
    match token.strip_suffix("...").or_else(|| token.strip_suffix('.')) {
        Some(number) => !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidGameRecord(reason.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(inputs: &[&str]) -> GameState {
        let mut game = GameState::new_game("Alice", "Bob");
        for input in inputs {
            game.handle_input(input).expect("input should be handled");
        }
        game
    }

    #[test]
    fn record_round_trip_replays_the_same_position() {
        let game = played(&["e2e4", "d7d5", "e4d5"]);
        let text = write_game_record(&game);

        assert!(text.contains("[White \"Alice\"]"));
        assert!(text.contains("[Black \"Bob\"]"));
        assert!(text.contains("1. e2e4 d7d5 2. e4d5 *"));

        let parsed = read_game_record(&text).expect("record should parse");
        assert_eq!(parsed.move_history, game.move_history);
        assert_eq!(parsed.final_state.board, game.board);
        assert_eq!(
            parsed.final_state.player(Color::Black).pawns_remaining,
            7
        );
        assert_eq!(parsed.result, "*");
    }

    #[test]
    fn date_header_uses_dotted_format() {
        let text = write_game_record(&played(&[]));
        let date_line = text
            .lines()
            .find(|line| line.starts_with("[Date "))
            .expect("date header should be written");
        let date = &date_line["[Date \"".len()..date_line.len() - 2];
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], ".");
        assert_eq!(&date[7..8], ".");
    }

    #[test]
    fn custom_start_position_is_recorded() {
        let mut game = GameState::from_pfen("8/8/8/3p4/4P3/8/P7/8 w -", "w", "b")
            .expect("position should parse");
        game.handle_input("e4d5").expect("capture should be handled");

        let text = write_game_record(&game);
        assert!(text.contains("[SetUp \"1\"]"));
        assert!(text.contains("[PFEN \"8/8/8/3p4/4P3/8/P7/8 w -\"]"));
        assert!(text.contains("1. e4d5 1-0"));

        let parsed = read_game_record(&text).expect("record should parse");
        assert_eq!(parsed.result, "1-0");
        assert_eq!(
            parsed.final_state.status,
            GameStatus::GameOver(GameOverReason::WhiteWins)
        );
    }

    #[test]
    fn black_opening_move_is_numbered_with_ellipsis() {
        let mut game = GameState::from_pfen("8/3p4/8/8/8/8/4P3/8 b -", "w", "b")
            .expect("position should parse");
        for input in ["d7d6", "e2e4", "d6d5"] {
            game.handle_input(input).expect("input should be handled");
        }

        let text = write_game_record(&game);
        assert!(text.contains("1... d7d6 2. e2e4 d6d5 *"));

        let parsed = read_game_record(&text).expect("record should parse");
        assert_eq!(parsed.move_history, game.move_history);
        assert_eq!(parsed.final_state.board, game.board);
        assert_eq!(parsed.initial_state.first_to_move, Color::Black);
    }

    #[test]
    fn illegal_move_in_record_is_refused() {
        let mut headers = BTreeMap::new();
        headers.insert("Result".to_owned(), "*".to_owned());
        let e2e5 = long_algebraic_to_move("e2e5").expect("move should parse");
        let text = write_game_record_with_headers(Color::White, &[e2e5], &headers);
        assert!(matches!(
            read_game_record(&text),
            Err(ChessErrors::InvalidGameRecord(_))
        ));
    }
}
