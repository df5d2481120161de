//! Round engine: turn alternation, human moves and AI replies.
//!
//! The engine is an explicit state machine over
//! [`EngineState::AwaitingHumanMove`], [`EngineState::AwaitingAiMove`] and
//! [`EngineState::RoundOver`]. X always moves first. A UI drives it with
//! [`Engine::submit_human_move`] and [`Engine::run_ai_move`] and reads
//! [`Engine::outcome`] after every command.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, LegalMove, MoveContract};
use crate::minimax;
use crate::outcome::Outcome;
use crate::types::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Round configuration chosen before the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineConfig {
    human: Player,
    vs_ai: bool,
}

impl EngineConfig {
    /// Creates a configuration.
    pub fn new(human: Player, vs_ai: bool) -> Self {
        Self { human, vs_ai }
    }

    /// Human plays `human`, the AI takes the other symbol.
    pub fn vs_ai(human: Player) -> Self {
        Self::new(human, true)
    }

    /// Two humans share the board; `human` is the symbol chosen on the menu.
    pub fn two_player(human: Player) -> Self {
        Self::new(human, false)
    }

    /// Symbol chosen by the human.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Whether the AI plays the other symbol.
    pub fn is_vs_ai(&self) -> bool {
        self.vs_ai
    }

    /// Symbol played by the AI, if enabled.
    pub fn ai_symbol(&self) -> Option<Player> {
        self.vs_ai.then(|| self.human.opponent())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::vs_ai(Player::X)
    }
}

/// Engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EngineState {
    /// A human must submit the next move.
    #[display("awaiting a human move")]
    AwaitingHumanMove,
    /// The AI must move next.
    #[display("awaiting the AI move")]
    AwaitingAiMove,
    /// The round has a winner or is drawn.
    #[display("the round is over")]
    RoundOver,
}

/// Result of a finished round from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Verdict {
    /// The human beat the AI.
    #[display("You win!")]
    HumanWins,
    /// The AI beat the human.
    #[display("AI wins!")]
    AiWins,
    /// A player won a two-player round.
    #[display("Player {} wins!", _0)]
    PlayerWins(Player),
    /// Nobody won.
    #[display("It's a draw!")]
    Draw,
}

/// Tic-tac-toe round engine.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Move>,
    config: EngineConfig,
    state: EngineState,
}

impl Engine {
    /// Starts a round with an empty board.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        let mut engine = Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
            config,
            state: EngineState::AwaitingHumanMove,
        };
        engine.state = engine.next_state();
        info!(state = %engine.state, "Round started");
        engine
    }

    /// Discards the current round and starts a new one under `config`.
    #[instrument(skip(self))]
    pub fn reset(&mut self, config: EngineConfig) {
        self.board.reset();
        self.history.clear();
        self.to_move = Player::X;
        self.config = config;
        self.state = self.next_state();
        info!(state = %self.state, "Round reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the round configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Symbol played by the AI, if enabled.
    pub fn ai_symbol(&self) -> Option<Player> {
        self.config.ai_symbol()
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Active engine state.
    pub fn current_state(&self) -> EngineState {
        self.state
    }

    /// Empty square indices, ascending.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.legal_moves()
    }

    /// Outcome derived from the board.
    #[instrument(level = "trace", skip(self))]
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Display verdict once the round is over.
    #[instrument(level = "trace", skip(self))]
    pub fn verdict(&self) -> Option<Verdict> {
        match self.outcome() {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(Verdict::Draw),
            Outcome::Won(winner) => Some(match self.config.ai_symbol() {
                Some(ai) if ai == winner => Verdict::AiWins,
                Some(_) => Verdict::HumanWins,
                None => Verdict::PlayerWins(winner),
            }),
        }
    }

    /// Places the current mover's mark at `index` on behalf of a human.
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundOver`] once the round has ended
    /// - [`MoveError::OutOfTurn`] while the AI is to move
    /// - [`MoveError::OutOfBounds`] / [`MoveError::SquareOccupied`] for an
    ///   illegal square
    ///
    /// The engine is unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<Move, MoveError> {
        self.expect_state(EngineState::AwaitingHumanMove)?;
        let position = LegalMove::check(index, &self.board)
            .inspect_err(|e| warn!(error = %e, index, "Human move rejected"))?;
        self.commit(Move::new(self.to_move, position))
    }

    /// Computes the AI's move with minimax and applies it.
    ///
    /// # Errors
    ///
    /// [`MoveError::RoundOver`] once the round has ended and
    /// [`MoveError::OutOfTurn`] while a human is to move.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn run_ai_move(&mut self) -> Result<Move, MoveError> {
        self.expect_state(EngineState::AwaitingAiMove)?;

        let ai = self.to_move;
        let choice = minimax::best_move(&mut self.board, ai).ok_or(MoveError::RoundOver)?;
        debug!(index = choice.index, score = choice.score, "AI chose move");

        let position = LegalMove::check(choice.index, &self.board)?;
        self.commit(Move::new(ai, position))
    }

    fn expect_state(&self, expected: EngineState) -> Result<(), MoveError> {
        match self.state {
            EngineState::RoundOver => Err(MoveError::RoundOver),
            state if state != expected => {
                warn!(%state, %expected, "Command rejected in current state");
                Err(MoveError::OutOfTurn(state))
            }
            _ => Ok(()),
        }
    }

    /// Validates, applies and records a move, then advances the state.
    fn commit(&mut self, action: Move) -> Result<Move, MoveError> {
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, %action, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(action.index(), action.player);
        self.history.push(action);
        self.to_move = action.player.opponent();

        #[cfg(debug_assertions)]
        self.verify_post(before)?;

        self.state = self.next_state();
        info!(%action, state = %self.state, "Move applied");
        if self.state == EngineState::RoundOver {
            info!(outcome = %self.outcome(), "Round over");
        }
        Ok(action)
    }

    /// Checks postconditions, restoring `before` if they fail.
    #[cfg(debug_assertions)]
    fn verify_post(&mut self, before: Engine) -> Result<(), MoveError> {
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, rolling back");
            *self = before;
            return Err(e);
        }
        Ok(())
    }

    fn next_state(&self) -> EngineState {
        if self.outcome().is_over() {
            return EngineState::RoundOver;
        }
        match self.config.ai_symbol() {
            Some(ai) if ai == self.to_move => EngineState::AwaitingAiMove,
            _ => EngineState::AwaitingHumanMove,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
