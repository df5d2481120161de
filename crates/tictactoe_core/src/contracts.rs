//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::engine::Engine;
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::position::Position;
use crate::types::Board;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the index names a board square.
pub struct InBounds;

impl InBounds {
    /// Converts `index` to a position, rejecting anything outside 0-8.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    #[instrument(skip(board))]
    pub fn check(position: Position, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(position.to_index()) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move made on behalf of the player not on turn.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &Engine) -> Result<(), MoveError> {
        if mov.player != engine.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the index is on the board and its square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates an index against the board, returning its position.
    #[instrument(skip(board))]
    pub fn check(index: usize, board: &Board) -> Result<Position, MoveError> {
        let position = InBounds::check(index)?;
        SquareIsEmpty::check(position, board)?;
        Ok(position)
    }
}

/// Contract for engine moves.
///
/// Preconditions:
/// - The round is not over
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one move was recorded
/// - Round invariants hold
pub struct MoveContract;

impl Contract<Engine, Move> for MoveContract {
    fn pre(engine: &Engine, action: &Move) -> Result<(), MoveError> {
        if engine.outcome().is_over() {
            return Err(MoveError::RoundOver);
        }
        SquareIsEmpty::check(action.position, engine.board())?;
        PlayersTurn::check(action, engine)?;
        Ok(())
    }

    fn post(before: &Engine, after: &Engine) -> Result<(), MoveError> {
        let grew = after.history().len() == before.history().len() + 1;
        if !grew {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one move recorded".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;
    use crate::types::{Player, Square};

    fn two_player() -> Engine {
        Engine::new(EngineConfig::two_player(Player::X))
    }

    #[test]
    fn test_in_bounds() {
        assert_eq!(InBounds::check(8), Ok(Position::BottomRight));
        assert_eq!(InBounds::check(9), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_legal_move_on_empty_square() {
        let board = Board::new();
        assert_eq!(LegalMove::check(4, &board), Ok(Position::Center));
    }

    #[test]
    fn test_legal_move_rejects_occupied() {
        let board: Board = "....X....".parse().unwrap();
        assert_eq!(
            LegalMove::check(4, &board),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let engine = two_player();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&engine, &action),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = two_player();
        let mut after = before.clone();
        after.submit_human_move(4).unwrap();

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = two_player();
        let mut after = before.clone();
        after.submit_human_move(4).unwrap();

        // Mark a square with no history entry behind it
        after.board.place(0, Player::O);
        assert_eq!(after.board.get(0), Some(Square::Occupied(Player::O)));

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_requires_one_new_move() {
        let before = two_player();
        let after = before.clone();

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
