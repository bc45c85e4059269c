use crate::game_state::game::Game;
use crate::players::player_trait::Player;

/// A user of the game. Moves arrive via the input-handling path, so
/// `update_game` performs no autonomous mutation.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanPlayer;

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        "Human"
    }

    fn is_human(&self) -> bool {
        true
    }

    fn update_game(&mut self, _game: &mut Game) {}
}
