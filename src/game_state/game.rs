//! The checkers turn state machine.
//!
//! `Game` owns a board, the whose-turn flag, and the pending-capture marker
//! used for multi-jump sequences. It validates attempted moves, applies them
//! in place, handles crowning and turn switching, and detects game over.
//! Save/restore goes through the compact state string in `utils`.

use crate::game_state::board::{self, Board};
use crate::game_state::checkers_types::{
    Point, Square, BLACK_CHECKER, BLACK_KING, EMPTY, INVALID, WHITE_CHECKER, WHITE_KING,
};
use crate::move_generation::move_generator::{get_moves, get_skips};
use crate::move_generation::move_validation::is_valid_move;
use crate::utils::state_generator::generate_game_state;
use crate::utils::state_parser::parse_game_state;

/// A game of checkers: board state plus the turn/capture-chain flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    is_p1_turn: bool,
    skip_index: Square,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starts a fresh game: standard layout, player 1 (black) to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            is_p1_turn: true,
            skip_index: INVALID,
        }
    }

    pub fn from_parts(board: Board, is_p1_turn: bool, skip_index: Square) -> Self {
        Self {
            board,
            is_p1_turn,
            skip_index,
        }
    }

    #[inline]
    pub fn from_state(state: &str) -> Self {
        parse_game_state(state)
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Attempts the move from `start_index` to `end_index`. Returns `false`
    /// with no side effects when the move is illegal.
    pub fn make_move(&mut self, start_index: Square, end_index: Square) -> bool {
        if !is_valid_move(self, start_index, end_index) {
            return false;
        }

        // Move the piece, clearing the jumped-over square on a capture.
        let mid_index = board::point_to_index(board::middle_square(start_index, end_index));
        self.board.set(end_index, self.board.get(start_index));
        self.board.set(mid_index, EMPTY);
        self.board.set(start_index, EMPTY);

        // Crowning always ends the turn, even when another jump would be
        // available from the new square.
        let end = board::to_point(end_index);
        let id = self.board.get(end_index);
        let mut switch_turn = false;
        if end.y == 0 && id == WHITE_CHECKER {
            self.board.set(end_index, WHITE_KING);
            switch_turn = true;
        } else if end.y == 7 && id == BLACK_CHECKER {
            self.board.set(end_index, BLACK_KING);
            switch_turn = true;
        }

        // A capture keeps the turn only while another jump can follow from
        // the landing square.
        let mid_valid = board::is_valid_index(mid_index);
        if mid_valid {
            self.skip_index = end_index;
        }
        if !mid_valid || get_skips(&self.board, end_index).is_empty() {
            switch_turn = true;
        }
        if switch_turn {
            self.is_p1_turn = !self.is_p1_turn;
            self.skip_index = INVALID;
        }

        true
    }

    pub fn make_move_points(&mut self, start: Point, end: Point) -> bool {
        self.make_move(board::point_to_index(start), board::point_to_index(end))
    }

    /// True when a color has no pieces left, or the player to move has no
    /// move and no skip across all of their pieces. One-ply only; callers
    /// poll this rather than the state machine reaching a terminal state.
    pub fn is_game_over(&self) -> bool {
        let mut black = self.board.find(BLACK_CHECKER);
        black.extend(self.board.find(BLACK_KING));
        if black.is_empty() {
            return true;
        }

        let mut white = self.board.find(WHITE_CHECKER);
        white.extend(self.board.find(WHITE_KING));
        if white.is_empty() {
            return true;
        }

        let movers = if self.is_p1_turn { black } else { white };
        !movers.iter().any(|p| {
            let index = board::point_to_index(*p);
            !get_moves(&self.board, index).is_empty() || !get_skips(&self.board, index).is_empty()
        })
    }

    /// A snapshot of the board; mutating it never affects the live game.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn is_p1_turn(&self) -> bool {
        self.is_p1_turn
    }

    pub fn set_p1_turn(&mut self, is_p1_turn: bool) {
        self.is_p1_turn = is_p1_turn;
    }

    /// The square a mid-chain capturing piece occupies, `INVALID` when no
    /// capture is pending.
    #[inline]
    pub fn skip_index(&self) -> Square {
        self.skip_index
    }

    #[inline]
    pub fn game_state(&self) -> String {
        generate_game_state(self)
    }

    pub fn set_game_state(&mut self, state: &str) {
        *self = parse_game_state(state);
    }
}
