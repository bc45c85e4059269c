use crate::game_state::board;
use crate::game_state::checkers_types::is_king;
use crate::game_state::game::Game;
use crate::move_generation::move_validation::legal_moves_for_current;

/// Leaf-move tallies from a fixed-depth walk of the move tree. One node per
/// applied move, so each segment of a multi-jump counts separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Walks every legal move sequence of `depth` applied moves, cloning the game
/// per candidate so the input is never mutated.
pub fn perft(game: &Game, depth: u8) -> Result<PerftCounts, String> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();

    for (start, end) in legal_moves_for_current(game) {
        let was_plain_checker = !is_king(game.board().get(start));
        let is_capture = board::is_valid_point(board::middle_square(start, end));

        let mut next = game.clone();
        if !next.make_move(start, end) {
            return Err(format!("generated move {start}->{end} failed to apply"));
        }

        if depth == 1 {
            total.nodes += 1;
            if is_capture {
                total.captures += 1;
            }
            if was_plain_checker && is_king(next.board().get(end)) {
                total.promotions += 1;
            }
        } else {
            total.merge(perft(&next, depth - 1)?);
        }
    }

    Ok(total)
}
