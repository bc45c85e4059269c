//! Move legality for the turn state machine.
//!
//! Layers the turn rules on top of the stateless generators: current-player
//! ownership, the pending capture-chain restriction, and the mandatory-capture
//! rule that outlaws plain moves while any capture is available.

use crate::game_state::board::{self, Board};
use crate::game_state::checkers_types::{
    checker_of, is_black_piece, is_white_piece, king_of, Color, Point, Square,
};
use crate::game_state::game::Game;
use crate::move_generation::move_generator::{get_moves, get_skips};

/// Checks whether moving from `start_index` to `end_index` is legal for the
/// player to move. Read-only; operates on a board snapshot.
pub fn is_valid_move(game: &Game, start_index: Square, end_index: Square) -> bool {
    let board = game.board();

    if !board::is_valid_index(start_index) || !board::is_valid_index(end_index) {
        return false;
    }
    if !validate_ownership(&board, game.is_p1_turn(), start_index) {
        return false;
    }
    // Only the piece mid-way through a capture chain may act.
    if board::is_valid_index(game.skip_index()) && game.skip_index() != start_index {
        return false;
    }

    validate_destination(&board, game.is_p1_turn(), start_index, end_index)
}

/// Every (start, end) pair the current player may legally play, in
/// increasing start-square order with skips listed before plain moves.
pub fn legal_moves_for_current(game: &Game) -> Vec<(Square, Square)> {
    let board = game.board();
    let mut moves = Vec::new();

    for start_point in pieces_of(&board, current_color(game.is_p1_turn())) {
        let start = board::point_to_index(start_point);
        for end_point in get_skips(&board, start) {
            let end = board::point_to_index(end_point);
            if is_valid_move(game, start, end) {
                moves.push((start, end));
            }
        }
        for end_point in get_moves(&board, start) {
            let end = board::point_to_index(end_point);
            if is_valid_move(game, start, end) {
                moves.push((start, end));
            }
        }
    }

    moves
}

fn current_color(is_p1_turn: bool) -> Color {
    if is_p1_turn {
        Color::Black
    } else {
        Color::White
    }
}

fn pieces_of(board: &Board, color: Color) -> Vec<Point> {
    let mut pieces = board.find(checker_of(color));
    pieces.extend(board.find(king_of(color)));
    pieces
}

fn validate_ownership(board: &Board, is_p1_turn: bool, start_index: Square) -> bool {
    let id = board.get(start_index);
    if is_p1_turn {
        is_black_piece(id)
    } else {
        is_white_piece(id)
    }
}

fn validate_destination(
    board: &Board,
    is_p1_turn: bool,
    start_index: Square,
    end_index: Square,
) -> bool {
    let end_point = board::to_point(end_index);

    if get_skips(board, start_index).contains(&end_point) {
        return true;
    }
    if !get_moves(board, start_index).contains(&end_point) {
        return false;
    }

    // A plain move is only legal while no capture is available anywhere.
    !any_skip_available(board, is_p1_turn)
}

fn any_skip_available(board: &Board, is_p1_turn: bool) -> bool {
    pieces_of(board, current_color(is_p1_turn))
        .iter()
        .any(|p| !get_skips(board, board::point_to_index(*p)).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{BLACK_CHECKER, EMPTY, INVALID, WHITE_CHECKER};

    fn empty_board() -> Board {
        let mut board = Board::new();
        for index in 0..32 {
            board.set(index, EMPTY);
        }
        board
    }

    // Black checkers on squares 0 and 8, a white checker on (2,3) capturable
    // only from square 8, black to move.
    fn forced_capture_game() -> Game {
        let mut board = empty_board();
        board.set(0, BLACK_CHECKER);
        board.set(8, BLACK_CHECKER);
        board.set_at(2, 3, WHITE_CHECKER);
        Game::from_parts(board, true, INVALID)
    }

    #[test]
    fn rejects_out_of_range_squares_and_empty_starts() {
        let game = Game::new();
        assert!(!is_valid_move(&game, INVALID, 12));
        assert!(!is_valid_move(&game, 8, 32));
        assert!(!is_valid_move(&game, 16, 12));
    }

    #[test]
    fn rejects_moving_the_opponents_pieces() {
        let game = Game::new();
        // Square 23 holds a white checker but it is black's turn.
        assert!(!is_valid_move(&game, 23, 18));
        assert!(is_valid_move(&game, 8, 12));
    }

    #[test]
    fn mandatory_capture_outlaws_plain_moves_by_any_piece() {
        let game = forced_capture_game();

        // The capture itself is legal.
        assert!(is_valid_move(&game, 8, 17));
        // A plain move by the capturing piece is not.
        assert!(!is_valid_move(&game, 8, 12));
        // Neither is a plain move by a piece that cannot capture.
        assert!(!is_valid_move(&game, 0, 4));

        assert_eq!(legal_moves_for_current(&game), vec![(8, 17)]);
    }

    #[test]
    fn pending_capture_square_restricts_the_start() {
        // Black mid-chain on (3,4) with a jump over (4,5) still open; a
        // second black checker sits on square 0.
        let mut board = empty_board();
        board.set(0, BLACK_CHECKER);
        board.set_at(3, 4, BLACK_CHECKER);
        board.set_at(4, 5, WHITE_CHECKER);
        let game = Game::from_parts(board, true, 17);

        assert!(is_valid_move(&game, 17, 26));
        assert!(!is_valid_move(&game, 0, 4));

        assert_eq!(legal_moves_for_current(&game), vec![(17, 26)]);
    }

    #[test]
    fn every_opening_move_is_a_plain_row_advance() {
        let game = Game::new();
        let moves = legal_moves_for_current(&game);

        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|&(start, _)| (8..12).contains(&start)));
    }
}
