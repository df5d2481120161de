//! Tic-tac-toe game engine.
//!
//! Pure game logic with no rendering dependency:
//!
//! - **Board**: the 3x3 grid, legal moves, apply/undo and outcome detection
//! - **Rules**: win and draw detection over the 8 lines
//! - **Minimax**: exhaustive adversarial search used by the AI
//! - **Engine**: the round state machine driving human and AI turns
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Engine, EngineConfig, EngineState, Player};
//!
//! let mut engine = Engine::new(EngineConfig::vs_ai(Player::X));
//! assert_eq!(engine.current_state(), EngineState::AwaitingHumanMove);
//!
//! engine.submit_human_move(4)?;
//! assert_eq!(engine.current_state(), EngineState::AwaitingAiMove);
//!
//! let reply = engine.run_ai_move()?;
//! assert_eq!(reply.player, Player::O);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod invariants;
mod minimax;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, InBounds, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use engine::{Engine, EngineConfig, EngineState, Verdict};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, RoundInvariants,
};
pub use minimax::{DRAW, LOSS, Score, ScoredMove, WIN, best_move};
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, BoardParseError, Player, Square};
