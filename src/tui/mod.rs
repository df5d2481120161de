//! Terminal UI: menu, board and result dialog.

mod app;
mod input;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

pub use app::{App, AppAction, Screen};
pub use input::{digit_index, move_cursor};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Takes over the terminal and runs `app` until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip(app), fields(screen = ?app.screen()))]
pub fn run(mut app: App) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Terminal UI closed");
    res
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases as well.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "Key pressed");
            if app.handle_key(key.code) == AppAction::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
