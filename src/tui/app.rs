//! Application state and key handling.

use crate::config::AppConfig;
use crate::mode::GameMode;
use crossterm::event::KeyCode;
use tictactoe_core::{Engine, EngineConfig, EngineState, Player, Position};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_index, move_cursor};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Symbol and mode selection.
    Menu,
    /// A round in progress.
    InGame,
    /// Finished round with the verdict dialog on top.
    GameOver,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    symbol: Player,
    mode: GameMode,
    engine: Engine,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates an application on the menu with the configured defaults.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            screen: Screen::Menu,
            symbol: *config.player_symbol(),
            mode: config.mode(),
            engine: Engine::new(config.engine_config()),
            cursor: Position::Center,
            status_message: "Choose a symbol and a mode".to_string(),
        }
    }

    /// Active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Symbol selected for the human player.
    pub fn symbol(&self) -> Player {
        self.symbol
    }

    /// Selected game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Engine running the current round.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Starts a round with the selected symbol and mode.
    ///
    /// When the AI holds X it opens immediately.
    #[instrument(skip(self), fields(symbol = %self.symbol, mode = ?self.mode))]
    pub fn start_round(&mut self) {
        self.engine
            .reset(EngineConfig::new(self.symbol, self.mode.is_vs_ai()));
        self.cursor = Position::Center;
        self.screen = Screen::InGame;
        self.status_message = String::new();
        info!("Round started from menu");

        self.advance_ai();
        self.refresh_status();
    }

    /// Handles a key press and reports whether to keep running.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::InGame => self.handle_game_key(key),
            Screen::GameOver => {
                debug!("Leaving result dialog");
                self.screen = Screen::Menu;
                self.status_message = "Choose a symbol and a mode".to_string();
                AppAction::Continue
            }
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Left | KeyCode::Right => self.symbol = self.symbol.opponent(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.symbol = Player::X,
            KeyCode::Char('o') | KeyCode::Char('O') => self.symbol = Player::O,
            KeyCode::Up | KeyCode::Down => self.mode = self.mode.toggled(),
            KeyCode::Enter => self.start_round(),
            KeyCode::Char('1') => {
                self.mode = GameMode::TwoPlayer;
                self.start_round();
            }
            KeyCode::Char('2') => {
                self.mode = GameMode::VsAi;
                self.start_round();
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_game_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => return AppAction::Quit,
            KeyCode::Esc => {
                info!("Round abandoned");
                self.screen = Screen::Menu;
                self.status_message = "Choose a symbol and a mode".to_string();
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_index(c) {
                    if let Some(position) = Position::from_index(index) {
                        self.cursor = position;
                    }
                    self.submit(index);
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    /// Sends a human move to the engine and lets the AI answer.
    fn submit(&mut self, index: usize) {
        match self.engine.submit_human_move(index) {
            Ok(action) => {
                debug!(%action, "Human move accepted");
                self.advance_ai();
                self.refresh_status();
            }
            Err(e) => {
                warn!(error = %e, index, "Human move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Runs AI moves while the engine is waiting on the AI.
    fn advance_ai(&mut self) {
        while self.engine.current_state() == EngineState::AwaitingAiMove {
            match self.engine.run_ai_move() {
                Ok(action) => debug!(%action, "AI replied"),
                Err(e) => {
                    warn!(error = %e, "AI move failed");
                    self.status_message = e.to_string();
                    return;
                }
            }
        }
    }

    fn refresh_status(&mut self) {
        if let Some(verdict) = self.engine.verdict() {
            info!(%verdict, "Showing result");
            self.status_message = verdict.to_string();
            self.screen = Screen::GameOver;
            return;
        }

        let last_ai = self
            .engine
            .history()
            .last()
            .filter(|m| Some(m.player) == self.engine.ai_symbol());
        self.status_message = match last_ai {
            Some(m) => format!(
                "AI played {}. Your move ({})",
                m.position.label(),
                self.engine.to_move()
            ),
            None => format!("Player {} to move", self.engine.to_move()),
        };
    }
}
