//! Board and status rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_crosses::{Banner, BoardView, KeyValueStore, Player, Position, Square};

/// Draws the whole screen.
pub fn render<B: KeyValueStore>(f: &mut Frame, app: &App<B>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Crosses & Toes")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app.view(), app.cursor());
    render_status(f, chunks[2], app);
    render_controls(f, chunks[3], app.view());
}

fn render_board(f: &mut Frame, area: Rect, view: &BoardView, cursor: Position) {
    let board_area = center_rect(area, 23, 11);
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

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(f, area, view, cursor, row * 3);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(f: &mut Frame, area: Rect, view: &BoardView, cursor: Position, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (offset, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(start + offset) {
            render_square(f, area, view, pos, pos == cursor);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, view: &BoardView, pos: Position, under_cursor: bool) {
    let (text, mut style) = match view.square(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.mark().to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };
    if view.is_highlighted(pos) {
        style = style.bg(Color::Yellow);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    // Pad to the vertical middle of the 3-line cell.
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(text)])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App<impl KeyValueStore>) {
    let view = app.view();
    let line = match (view.banner(), view.to_move()) {
        (Some(Banner::Won(player)), _) => {
            let tag = view
                .highlight()
                .map(|line| format!(" ({})", line.orientation))
                .unwrap_or_default();
            Line::from(Span::styled(
                format!("{}{}", Banner::Won(player), tag),
                Style::default()
                    .fg(player_color(player))
                    .add_modifier(Modifier::BOLD),
            ))
        }
        (Some(Banner::Draw), _) => Line::from(Span::styled(
            Banner::Draw.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        (None, Some(player)) => Line::from(vec![
            Span::styled(
                player.name(),
                Style::default().fg(player_color(player)),
            ),
            Span::raw(format!(" to move · {}", app.status_message())),
        ]),
        (None, None) => Line::from(app.status_message().to_string()),
    };
    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_controls(f: &mut Frame, area: Rect, view: &BoardView) {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled("[u] undo", if view.undo_enabled() { enabled } else { disabled }),
        Span::raw("   "),
        Span::styled("[r] redo", if view.redo_enabled() { enabled } else { disabled }),
        Span::raw("   "),
        Span::styled("[n] restart", enabled),
        Span::raw("   "),
        Span::styled("[q] quit", enabled),
    ]);
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(controls, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Cross => Color::Blue,
        Player::Zero => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
