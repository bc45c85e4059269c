//! Stateless candidate-move enumeration over a board snapshot.
//!
//! Enumerates single-step destinations and two-step jump destinations for the
//! piece on a given square, applying the piece-direction rules (checkers move
//! toward their forward row, kings in all four diagonals). Off-board and
//! light-square candidates are discarded because the coordinate conversion
//! fails closed.

use crate::game_state::board::{self, Board};
use crate::game_state::checkers_types::{
    is_black_piece, is_king, is_white_piece, piece_color, PieceCode, Point, Square, BLACK_CHECKER,
    EMPTY, INVALID, WHITE_CHECKER,
};

/// Candidate single-step destinations for the piece on `start_index`,
/// filtered to empty squares. Empty for an invalid or unoccupied start.
pub fn get_moves(board: &Board, start_index: Square) -> Vec<Point> {
    let mut end_points = Vec::new();
    if !board::is_valid_index(start_index) {
        return end_points;
    }

    let id = board.get(start_index);
    let start = board::to_point(start_index);
    add_points(&mut end_points, start, id, 1);

    end_points.retain(|end| board.get_at(end.x, end.y) == EMPTY);
    end_points
}

/// Candidate jump destinations for the piece on `start_index`, filtered by
/// `is_valid_skip`.
pub fn get_skips(board: &Board, start_index: Square) -> Vec<Point> {
    let mut end_points = Vec::new();
    if !board::is_valid_index(start_index) {
        return end_points;
    }

    let id = board.get(start_index);
    let start = board::to_point(start_index);
    add_points(&mut end_points, start, id, 2);

    end_points.retain(|end| is_valid_skip(board, start_index, board::point_to_index(*end)));
    end_points
}

/// True when jumping from `start_index` to `end_index` is a legal capture:
/// the landing square is empty, the jumped-over square holds a piece of the
/// opposite color, and the jump respects the mover's direction rule.
pub fn is_valid_skip(board: &Board, start_index: Square, end_index: Square) -> bool {
    if board.get(end_index) != EMPTY {
        return false;
    }

    let id = board.get(start_index);
    let mid_id = board.get(board::point_to_index(board::middle_square(
        start_index,
        end_index,
    )));

    if id == INVALID || id == EMPTY {
        return false;
    }
    if mid_id == INVALID || mid_id == EMPTY {
        return false;
    }
    // The jumped piece must belong to the other side.
    if piece_color(mid_id) == piece_color(id) {
        return false;
    }

    // Plain checkers may only jump toward their forward row.
    if !is_king(id) {
        let dy = board::to_point(end_index).y - board::to_point(start_index).y;
        if is_black_piece(id) && dy != 2 {
            return false;
        }
        if is_white_piece(id) && dy != -2 {
            return false;
        }
    }

    true
}

// Pushes the diagonal candidates `delta` steps away, restricted to the
// directions the piece code may move in.
fn add_points(points: &mut Vec<Point>, p: Point, id: PieceCode, delta: i32) {
    let king = is_king(id);

    // Toward increasing y (black's forward direction).
    if king || id == BLACK_CHECKER {
        points.push(Point::new(p.x + delta, p.y + delta));
        points.push(Point::new(p.x - delta, p.y + delta));
    }

    // Toward decreasing y (white's forward direction).
    if king || id == WHITE_CHECKER {
        points.push(Point::new(p.x + delta, p.y - delta));
        points.push(Point::new(p.x - delta, p.y - delta));
    }
}
