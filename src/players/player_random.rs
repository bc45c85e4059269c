//! Uniform-random computer player.
//!
//! Selects uniformly from the legal moves of the side to move and is
//! primarily used for diagnostics and integration testing.

use rand::prelude::IndexedRandom;

use crate::game_state::game::Game;
use crate::move_generation::move_validation::legal_moves_for_current;
use crate::players::player_trait::Player;

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn is_human(&self) -> bool {
        false
    }

    fn update_game(&mut self, game: &mut Game) {
        if game.is_game_over() {
            return;
        }

        let legal_moves = legal_moves_for_current(game);
        let mut rng = rand::rng();
        if let Some(&(start, end)) = legal_moves.as_slice().choose(&mut rng) {
            game.make_move(start, end);
        }
    }
}
