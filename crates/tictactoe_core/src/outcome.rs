//! Derived classification of a board.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a board, computed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    Ongoing,
    /// Player owns a complete line.
    Won(Player),
    /// Board is full with no complete line.
    Draw,
}

impl Outcome {
    /// Returns true once the board is terminal.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
