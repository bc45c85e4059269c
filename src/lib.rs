//! Crate root module declarations for the checkers rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! players, and utility helpers) so tests, benches, and external tooling can
//! import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod move_validation;
    pub mod perft;
}

pub mod players {
    pub mod player_human;
    pub mod player_random;
    pub mod player_trait;
}

pub mod utils {
    pub mod pdn;
    pub mod render_game_state;
    pub mod state_generator;
    pub mod state_parser;
}
