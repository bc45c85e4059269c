//! Canonical checkers-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting-position state string used to initialize and validate game setup.

/// Standard starting position: black checkers on squares 0-11, white checkers
/// on squares 20-31, player 1 (black) to move, no capture pending.
pub const STARTING_POSITION_STATE: &str = "666666666666000000004444444444441-1";
