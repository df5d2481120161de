//! First-class invariants for a tic-tac-toe round.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are testable independently and checked after every engine move
//! in debug builds.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for three-element tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn record<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        record::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, EngineConfig};
    use crate::types::Player;

    fn play(moves: &[usize]) -> Engine {
        let mut engine = Engine::new(EngineConfig::two_player(Player::X));
        for &index in moves {
            engine.submit_human_move(index).unwrap();
        }
        engine
    }

    #[test]
    fn test_invariant_set_holds_for_new_round() {
        assert!(RoundInvariants::check_all(&play(&[])).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        assert!(RoundInvariants::check_all(&play(&[0, 4, 2])).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = play(&[4]);
        engine.board.place(0, Player::O);

        let violations = RoundInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == HistoryConsistentInvariant::description())
        );
    }
}
