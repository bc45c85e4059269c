//! Player abstraction used by the scheduling layer.
//!
//! Defines the single capability the turn scheduler needs from either side
//! of the board, so human input adapters and computer movers can be selected
//! at runtime behind one trait interface.

use crate::game_state::game::Game;

pub trait Player: Send {
    fn name(&self) -> &str;

    /// True when this player's moves arrive through an external input path
    /// (e.g. board clicks) instead of `update_game`.
    fn is_human(&self) -> bool;

    /// Invoked by the scheduling layer when it is this player's turn. A
    /// non-human player applies at most one move per invocation; the
    /// scheduler re-invokes it while a capture chain keeps the turn.
    fn update_game(&mut self, game: &mut Game);
}
