//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::engine::Engine;

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.history().len() == engine.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
