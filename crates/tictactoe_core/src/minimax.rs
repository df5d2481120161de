//! Exhaustive minimax search for the AI player.
//!
//! The search alternates AI-maximizing and opponent-minimizing layers over
//! the board with in-place apply/undo. Leaves score +1 (AI won), -1
//! (opponent won) or 0 (draw). Scores are not discounted by depth, so a
//! win in one ply is worth the same as a win in five. Ties between moves
//! keep the lowest index.

use crate::outcome::Outcome;
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax score from the AI's point of view.
pub type Score = i8;

/// Score of a line the AI wins.
pub const WIN: Score = 1;
/// Score of a drawn line.
pub const DRAW: Score = 0;
/// Score of a line the opponent wins.
pub const LOSS: Score = -1;

/// A candidate move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Board index of the move (0-8).
    pub index: usize,
    /// Guaranteed worst-case score for the AI after this move.
    pub score: Score,
}

impl ScoredMove {
    /// Named position of the move.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

/// Picks the AI's move on `board`.
///
/// Every legal move is scored by a full search of the remaining tree and
/// the first move with the strictly greatest score wins. The board is
/// restored before returning. Returns `None` when no square is empty.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn best_move(board: &mut Board, ai: Player) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;

    for index in board.legal_moves() {
        board.place(index, ai);
        let score = minimax(board, ai, false);
        board.undo(index);

        debug!(index, score, "Scored candidate");
        if best.is_none_or(|current| score > current.score) {
            best = Some(ScoredMove { index, score });
        }
    }

    debug!(?best, "Search complete");
    best
}

/// Scores `board` for `ai`, with `maximizing` telling whose layer this is.
fn minimax(board: &mut Board, ai: Player, maximizing: bool) -> Score {
    match board.outcome() {
        Outcome::Won(winner) if winner == ai => return WIN,
        Outcome::Won(_) => return LOSS,
        Outcome::Draw => return DRAW,
        Outcome::Ongoing => {}
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let mut best = if maximizing { LOSS - 1 } else { WIN + 1 };

    for index in board.legal_moves() {
        board.place(index, mover);
        let score = minimax(board, ai, !maximizing);
        board.undo(index);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let mut board: Board = "XX.OO....".parse().unwrap();
        let choice = best_move(&mut board, Player::X).unwrap();
        assert_eq!(choice, ScoredMove { index: 2, score: WIN });
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board: Board = "X...O....".parse().unwrap();
        let before = board.clone();
        best_move(&mut board, Player::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(best_move(&mut board, Player::O), None);
    }

    #[test]
    fn test_last_square_is_forced() {
        // X O X / O O X / X X .
        let mut board: Board = "XOXOOXXX.".parse().unwrap();
        let choice = best_move(&mut board, Player::O).unwrap();
        assert_eq!(choice, ScoredMove { index: 8, score: DRAW });
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X X . / . O . / . . .  with O to move: only the block avoids a loss
        let mut board: Board = "XX..O....".parse().unwrap();
        let choice = best_move(&mut board, Player::O).unwrap();
        assert_eq!(choice, ScoredMove { index: 2, score: DRAW });
    }
}
