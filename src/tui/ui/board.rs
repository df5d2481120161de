//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_core::{Board, Player, Position, Square, rules};

/// Colour of X marks.
pub const X_COLOR: Color = Color::Rgb(0xff, 0x4c, 0x4c);
/// Colour of O marks.
pub const O_COLOR: Color = Color::Rgb(0x4c, 0xc9, 0xff);

/// Renders the board centred in `area`.
///
/// `cursor` is highlighted when present; a completed line is drawn reversed.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let board_area = center_rect(area, 40, 11);
    let highlight = rules::winning_line(board).map(|(_, line)| line);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(f, chunk, board, row, cursor, highlight.as_ref());
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    row: usize,
    cursor: Option<Position>,
    highlight: Option<&[Position; 3]>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (column, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_column(row, column) {
            let winning = highlight.is_some_and(|line| line.contains(&pos));
            render_square(f, chunk, board.at(pos), pos, cursor == Some(pos), winning);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    selected: bool,
    winning: bool,
) {
    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(X_COLOR).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(O_COLOR).add_modifier(Modifier::BOLD),
        ),
    };
    if selected {
        style = style.bg(Color::White);
    }
    if winning {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically centre the mark in its three-line cell.
    let lines = format!("\n{}", text);
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

/// Returns a `width` x `height` rect centred in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
