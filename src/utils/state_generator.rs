use crate::game_state::game::Game;

/// Serializes the full game state: 32 piece-code digits in increasing square
/// order, `'1'`/`'0'` for the turn flag, then the decimal pending-capture
/// index (`-1` when none).
pub fn generate_game_state(game: &Game) -> String {
    let board = game.board();
    let mut out = String::with_capacity(35);

    for index in 0..32 {
        out.push(char::from(b'0' + board.get(index) as u8));
    }
    out.push(if game.is_p1_turn() { '1' } else { '0' });
    out.push_str(&game.skip_index().to_string());

    out
}

#[cfg(test)]
mod tests {
    use super::generate_game_state;
    use crate::game_state::checkers_rules::STARTING_POSITION_STATE;
    use crate::game_state::game::Game;
    use crate::utils::state_parser::parse_game_state;

    #[test]
    fn starting_position_matches_the_canonical_constant() {
        assert_eq!(generate_game_state(&Game::new()), STARTING_POSITION_STATE);
    }

    #[test]
    fn round_trips_a_played_position() {
        let mut game = Game::new();
        assert!(game.make_move(10, 14));
        assert!(game.make_move(22, 17));

        let state = generate_game_state(&game);
        let reparsed = parse_game_state(&state);
        assert_eq!(reparsed, game);
        assert_eq!(generate_game_state(&reparsed), state);
    }
}
