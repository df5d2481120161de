//! Terminal tic-tac-toe against a friend or a minimax AI.
//!
//! The rules, engine and search live in [`tictactoe_core`]; this crate adds
//! configuration, the command line and the terminal UI.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AppConfig, Suggestion, suggest};
//! use tictactoe::tui::{App, Screen};
//! use tictactoe_core::{Board, Player};
//!
//! let app = App::new(&AppConfig::default());
//! assert_eq!(app.screen(), Screen::Menu);
//!
//! let board: Board = "XX.OO....".parse().unwrap();
//! match suggest(&board, Player::X) {
//!     Suggestion::Move { index, .. } => assert_eq!(index, 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod mode;
mod suggest;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use mode::GameMode;
pub use suggest::{Suggestion, suggest};
