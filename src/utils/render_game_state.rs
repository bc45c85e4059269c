//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments. Row 0 (black's home row) prints at the top; light
//! squares render as blanks and empty dark squares as `·`.

use crate::game_state::board;
use crate::game_state::checkers_types::{
    PieceCode, BLACK_CHECKER, BLACK_KING, WHITE_CHECKER, WHITE_KING,
};
use crate::game_state::game::Game;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game: &Game) -> String {
    let board = game.board();
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in 0..8 {
        out.push(char::from(b'0' + y as u8));
        out.push(' ');

        for x in 0..8 {
            let index = board::to_index(x, y);
            if board::is_valid_index(index) {
                out.push(piece_to_unicode(board.get(index)));
            } else {
                out.push(' ');
            }

            if x < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + y as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(code: PieceCode) -> char {
    match code {
        WHITE_CHECKER => '⛀',
        WHITE_KING => '⛁',
        BLACK_CHECKER => '⛂',
        BLACK_KING => '⛃',
        _ => '·',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game::Game;

    #[test]
    fn starting_render_shows_both_sides_and_labels() {
        let rendered = render_game_state(&Game::new());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[9], "  a b c d e f g h");

        assert_eq!(rendered.matches('⛂').count(), 12);
        assert_eq!(rendered.matches('⛀').count(), 12);
        assert_eq!(rendered.matches('·').count(), 8);

        // Black's home row is printed first.
        assert!(lines[1].contains('⛂'));
        assert!(lines[8].contains('⛀'));
    }
}
