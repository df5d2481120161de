//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::engine::Engine;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the player to move
/// must match the parity of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        engine.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
