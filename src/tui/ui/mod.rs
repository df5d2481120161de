//! UI rendering using ratatui.

mod board;
mod menu;

use super::app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub use board::{O_COLOR, X_COLOR, center_rect, render_board};
pub use menu::render_menu;

/// Draws the active screen.
pub fn draw(f: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Menu => render_menu(f, app),
        Screen::InGame => render_game(f, app),
        Screen::GameOver => {
            render_game(f, app);
            render_game_over(f, app);
        }
    }
}

fn render_game(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Tic Tac Toe - {}", app.mode().name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let cursor = (app.screen() == Screen::InGame).then_some(app.cursor());
    render_board(f, chunks[1], app.engine().board(), cursor);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows: Move | Enter/Space or 1-9: Place | Esc: Menu | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

fn render_game_over(f: &mut Frame, app: &App) {
    let area = center_rect(f.area(), 36, 6);
    let verdict = app
        .engine()
        .verdict()
        .map(|v| v.to_string())
        .unwrap_or_default();

    let dialog = Paragraph::new(format!("{}\n\nPress any key for the menu", verdict))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}
