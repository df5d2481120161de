//! Tic-tac-toe command line.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tictactoe::tui::{self, App};
use tictactoe::{AppConfig, Cli, Command, GameMode, suggest};
use tictactoe_core::{Board, Player};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tictactoe_core=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            symbol,
            mode,
        } => run_play(config, symbol, mode),
        Command::Suggest { board, ai, json } => run_suggest(board, ai, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Runs the interactive terminal game.
fn run_play(config_path: PathBuf, symbol: Option<Player>, mode: Option<GameMode>) -> Result<()> {
    let config = AppConfig::load_or_default(&config_path)?.with_overrides(symbol, mode);

    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(config = %config_path.display(), "Starting tic-tac-toe");

    let mut app = App::new(&config);
    if symbol.is_some() && mode.is_some() {
        app.start_round();
    }
    tui::run(app)
}

/// Prints the AI's move for a board.
fn run_suggest(board: Board, ai: Player, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    info!(board = %board.compact(), %ai, "Suggesting move");
    let suggestion = suggest(&board, ai);
    if json {
        let out =
            serde_json::to_string(&suggestion).context("Failed to serialize suggestion")?;
        println!("{}", out);
    } else {
        println!("{}", board.display());
        println!();
        println!("{}", suggestion);
    }
    Ok(())
}
