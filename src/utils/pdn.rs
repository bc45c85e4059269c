//! PDN read/write utilities for game-record interchange.
//!
//! Serializes a move history to portable-draughts-notation text and parses it
//! back by replaying the movetext through the rules engine. Squares use the
//! numeric 1-32 naming, `-` separates the squares of a simple move, and `x`
//! joins the landing squares of a capture chain into a single token.

use std::collections::BTreeMap;

use crate::game_state::board;
use crate::game_state::checkers_rules::STARTING_POSITION_STATE;
use crate::game_state::checkers_types::Square;
use crate::game_state::game::Game;

#[derive(Debug, Clone)]
pub struct PdnGame {
    pub headers: BTreeMap<String, String>,
    pub initial_state: Game,
    /// One entry per applied move; a capture chain contributes one entry per
    /// jump segment.
    pub move_history: Vec<(Square, Square)>,
    pub final_state: Game,
    pub result: String,
}

pub fn write_pdn(
    initial_state: &Game,
    move_history: &[(Square, Square)],
    result: &str,
) -> Result<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial = initial_state.game_state();
    if initial != STARTING_POSITION_STATE {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("State".to_owned(), initial);
    }

    write_pdn_with_headers(initial_state, move_history, &headers)
}

pub fn write_pdn_with_headers(
    initial_state: &Game,
    move_history: &[(Square, Square)],
    headers: &BTreeMap<String, String>,
) -> Result<String, String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pdn_value(value)));
    }
    out.push('\n');

    let mut state = initial_state.clone();
    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    let mut turn_number = 0usize;

    for &(start, end) in move_history {
        let mover_is_p1 = state.is_p1_turn();
        let continues_chain =
            board::is_valid_index(state.skip_index()) && !movetext_parts.is_empty();
        let is_capture = board::is_valid_point(board::middle_square(start, end));

        if !state.make_move(start, end) {
            return Err(format!("illegal move {}-{} in history", start + 1, end + 1));
        }

        if continues_chain {
            // Extend the open token: "10x19" becomes "10x19x26".
            let token = movetext_parts
                .last_mut()
                .ok_or("capture chain with no opening move")?;
            token.push_str(&format!("x{}", end + 1));
            continue;
        }

        let separator = if is_capture { 'x' } else { '-' };
        let token = format!("{}{separator}{}", start + 1, end + 1);
        if mover_is_p1 {
            turn_number += 1;
            movetext_parts.push(format!("{turn_number}. {token}"));
        } else {
            movetext_parts.push(token);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

pub fn read_pdn(pdn: &str) -> Result<PdnGame, String> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pdn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial_state = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let state = headers
            .get("State")
            .ok_or("PDN SetUp=1 is present but State header is missing")?;
        Game::from_state(state)
    } else {
        Game::new()
    };

    let mut state = initial_state.clone();
    let mut move_history = Vec::<(Square, Square)>::new();
    let mut result = "*".to_owned();

    let movetext = strip_pdn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }

        for (start, end) in parse_move_token(token)? {
            if !state.make_move(start, end) {
                return Err(format!(
                    "illegal move {}-{} in movetext",
                    start + 1,
                    end + 1
                ));
            }
            move_history.push((start, end));
        }
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PdnGame {
        headers,
        initial_state,
        move_history,
        final_state: state,
        result,
    })
}

// Splits "10x19x26" / "9-13" into applied (start, end) square-index pairs.
fn parse_move_token(token: &str) -> Result<Vec<(Square, Square)>, String> {
    let squares: Vec<Square> = token
        .split(['-', 'x'])
        .map(|part| {
            part.parse::<Square>()
                .map_err(|_| format!("invalid square number in token '{token}'"))
        })
        .collect::<Result<_, _>>()?;

    if squares.len() < 2 {
        return Err(format!("move token '{token}' needs at least two squares"));
    }
    if let Some(bad) = squares.iter().find(|&&n| !(1..=32).contains(&n)) {
        return Err(format!("square number {bad} out of range in token '{token}'"));
    }

    Ok(squares.windows(2).map(|w| (w[0] - 1, w[1] - 1)).collect())
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(format!("Invalid PDN header line: {line}"));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| format!("Invalid PDN header key: {line}"))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| format!("Invalid PDN header value: {line}"))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(format!("Invalid quoted PDN header value: {line}"));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_pdn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    token.ends_with('.')
        && token
            .trim_end_matches('.')
            .chars()
            .all(|c| c.is_ascii_digit())
        && !token.trim_end_matches('.').is_empty()
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

fn escape_pdn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{read_pdn, write_pdn, write_pdn_with_headers};
    use std::collections::BTreeMap;

    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{BLACK_CHECKER, EMPTY, INVALID, WHITE_CHECKER};
    use crate::game_state::game::Game;

    #[test]
    fn round_trips_an_opening_history() {
        let mut game = Game::new();
        let history = vec![(8, 13), (23, 18), (9, 14)];
        for &(start, end) in &history {
            assert!(game.make_move(start, end), "history move should apply");
        }

        let pdn = write_pdn(&Game::new(), &history, "*").expect("PDN should write");
        let parsed = read_pdn(&pdn).expect("PDN should parse");

        assert_eq!(parsed.move_history, history);
        assert_eq!(parsed.final_state, game);
        assert_eq!(parsed.result, "*");
    }

    #[test]
    fn capture_chain_merges_into_a_single_token() {
        let mut board = Board::new();
        for index in 0..32 {
            board.set(index, EMPTY);
        }
        board.set_at(1, 2, BLACK_CHECKER);
        board.set_at(2, 3, WHITE_CHECKER);
        board.set_at(4, 5, WHITE_CHECKER);
        let initial = Game::from_parts(board, true, INVALID);

        let history = vec![(8, 17), (17, 26)];
        let pdn = write_pdn(&initial, &history, "1-0").expect("PDN should write");

        assert!(pdn.contains("1. 9x18x27"), "chain should be one token: {pdn}");

        let parsed = read_pdn(&pdn).expect("PDN should parse");
        assert_eq!(parsed.move_history, history);
        assert_eq!(parsed.result, "1-0");
        assert!(parsed.final_state.board().find(WHITE_CHECKER).is_empty());
    }

    #[test]
    fn setup_header_restores_a_custom_initial_state() {
        let mut board = Board::new();
        for index in 0..32 {
            board.set(index, EMPTY);
        }
        board.set_at(1, 2, BLACK_CHECKER);
        board.set_at(6, 5, WHITE_CHECKER);
        let initial = Game::from_parts(board, false, INVALID);

        let history = vec![(23, 18)];
        let pdn = write_pdn(&initial, &history, "*").expect("PDN should write");
        let parsed = read_pdn(&pdn).expect("PDN should parse");

        assert_eq!(parsed.initial_state, initial);
        assert_eq!(parsed.move_history, history);
    }

    #[test]
    fn comments_and_custom_headers_survive_parsing() {
        let mut headers = BTreeMap::<String, String>::new();
        headers.insert("Event".to_owned(), "Club Night".to_owned());
        headers.insert("Result".to_owned(), "1/2-1/2".to_owned());

        let pdn = write_pdn_with_headers(&Game::new(), &[(8, 13), (23, 18)], &headers)
            .expect("PDN should write");
        let commented = pdn.replace("1. 9-14", "1. 9-14 {a quiet start}");

        let parsed = read_pdn(&commented).expect("PDN should parse");
        assert_eq!(parsed.headers.get("Event").map(String::as_str), Some("Club Night"));
        assert_eq!(parsed.result, "1/2-1/2");
        assert_eq!(parsed.move_history, vec![(8, 13), (23, 18)]);
    }

    #[test]
    fn illegal_history_moves_are_rejected() {
        let err = write_pdn(&Game::new(), &[(8, 17)], "*").expect_err("jump from 9 is illegal");
        assert!(err.contains("illegal move"));

        let err = read_pdn("1. 9x18 *").expect_err("movetext jump is illegal");
        assert!(err.contains("illegal move"));
    }
}
