//! Menu screen: symbol choice and mode entries.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_core::Player;

use super::board::{O_COLOR, X_COLOR};
use crate::mode::GameMode;
use crate::tui::App;

/// Draws the menu.
pub fn render_menu(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let symbols: Vec<Span> = [Player::X, Player::O]
        .into_iter()
        .flat_map(|player| {
            let color = match player {
                Player::X => X_COLOR,
                Player::O => O_COLOR,
            };
            let style = if player == app.symbol() {
                Style::default()
                    .fg(color)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(color)
            };
            [Span::styled(format!(" {} ", player), style), Span::raw("  ")]
        })
        .collect();
    let mut line = vec![Span::raw("Play as: ")];
    line.extend(symbols);
    let symbol_bar = Paragraph::new(Line::from(line))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(symbol_bar, chunks[1]);

    let items: Vec<ListItem> = GameMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| ListItem::new(format!("{}. {}", i + 1, mode.name())))
        .collect();
    let menu = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Mode"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(GameMode::ALL.iter().position(|m| *m == app.mode()));
    f.render_stateful_widget(menu, chunks[2], &mut list_state);

    let help = Paragraph::new("←→/x/o: Symbol | ↑↓: Mode | Enter/1/2: Start | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
