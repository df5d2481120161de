//! Command-line interface for tictactoe.

use crate::mode::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Board, Player};

/// Tic-tac-toe against a friend or a minimax AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a friend or a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Symbol you play (X moves first)
        #[arg(short, long)]
        symbol: Option<Player>,

        /// Opponent; with --symbol, skips the menu
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,
    },

    /// Print the AI's move for a board
    Suggest {
        /// Nine squares in row-major order, e.g. "XX.OO...."
        board: Board,

        /// Symbol the AI plays
        #[arg(long)]
        ai: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("tictactoe.toml"),
            symbol: None,
            mode: None,
        }
    }
}
