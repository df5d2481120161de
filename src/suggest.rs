//! One-shot AI move suggestion for a board.

use serde::Serialize;
use tictactoe_core::{Board, Outcome, Player, Score, best_move};
use tracing::{info, instrument};

/// What the AI would do on a given board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Suggestion {
    /// The move minimax picks.
    Move {
        /// Board index (0-8).
        index: usize,
        /// Named position of the move.
        position: String,
        /// Minimax score for the AI.
        score: Score,
    },
    /// The board is already terminal.
    Finished {
        /// Outcome of the board.
        outcome: String,
    },
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suggestion::Move {
                index,
                position,
                score,
            } => {
                let verdict = match *score {
                    s if s > 0 => "forced win",
                    0 => "draw with best play",
                    _ => "loss against best play",
                };
                write!(
                    f,
                    "Play square {} ({}) - {} (score {})",
                    index + 1,
                    position,
                    verdict,
                    score
                )
            }
            Suggestion::Finished { outcome } => write!(f, "Game over: {}", outcome),
        }
    }
}

/// Runs the search for `ai` on a copy of `board`.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn suggest(board: &Board, ai: Player) -> Suggestion {
    let outcome = board.outcome();
    if outcome.is_over() {
        return Suggestion::Finished {
            outcome: outcome.to_string(),
        };
    }

    let mut scratch = board.clone();
    match best_move(&mut scratch, ai) {
        Some(choice) => {
            info!(index = choice.index, score = choice.score, "Suggested move");
            Suggestion::Move {
                index: choice.index,
                position: choice
                    .position()
                    .map(|p| p.label().to_string())
                    .unwrap_or_default(),
                score: choice.score,
            }
        }
        None => Suggestion::Finished {
            outcome: Outcome::Draw.to_string(),
        },
    }
}
