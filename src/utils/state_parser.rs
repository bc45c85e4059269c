//! State-string-to-`Game` parser.
//!
//! The inverse of `state_generator`: 32 piece-code digits, a turn marker, and
//! a pending-capture suffix. Parsing is lenient by contract — it always
//! yields a well-formed game, starting from the reset position and keeping
//! defaults wherever a fragment fails to parse.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{PieceCode, Square, INVALID};
use crate::game_state::game::Game;

/// Builds a `Game` from a serialized state string. Never fails: malformed
/// digits are skipped (the square keeps its reset default), a missing turn
/// marker keeps player 1 to move, and an unparsable pending-capture suffix
/// defaults to `INVALID`.
pub fn parse_game_state(state: &str) -> Game {
    let mut board = Board::new();
    let mut is_p1_turn = true;
    let mut skip_index: Square = INVALID;

    let chars: Vec<char> = state.chars().collect();

    for (index, ch) in chars.iter().take(32).enumerate() {
        if let Some(code) = ch.to_digit(10) {
            board.set(index as Square, code as PieceCode);
        }
    }

    if chars.len() > 32 {
        is_p1_turn = chars[32] == '1';
    }
    if chars.len() > 33 {
        let suffix: String = chars[33..].iter().collect();
        skip_index = suffix.parse::<Square>().unwrap_or(INVALID);
    }

    Game::from_parts(board, is_p1_turn, skip_index)
}
