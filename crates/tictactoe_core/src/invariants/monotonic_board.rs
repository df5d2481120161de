//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::engine::Engine;
use crate::types::Board;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must succeed
/// square by square and reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Engine> for MonotonicBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if reconstructed.apply(mov.index(), mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
