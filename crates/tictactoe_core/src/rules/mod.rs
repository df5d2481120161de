//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are separated from board
//! storage so the engine, the search and the contracts share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Classifies a board as ongoing, won or drawn.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
