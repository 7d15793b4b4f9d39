//! Stateless board rendering.

use super::app::App;
use crate::game::PlayerId;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the whole screen: title, board, and ticker line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Ticker
        ])
        .split(area);

    let title = Paragraph::new("Connect Four")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(board_title(app)));
    frame.render_widget(board, chunks[1]);

    let ticker = Paragraph::new(app.ticker())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(ticker, chunks[2]);
}

fn board_title(app: &App) -> String {
    format!("{} vs {}", app.players()[0], app.players()[1])
}

/// Builds the control row plus one line per grid row, top row first.
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let grid = app.grid();
    let mut lines = Vec::with_capacity(grid.rows() + 2);

    // Control row: the key to press for each column.
    let header = (1..=grid.columns())
        .map(|col| Span::styled(format!(" {col} "), Style::default().fg(Color::DarkGray)))
        .collect::<Vec<_>>();
    lines.push(Line::from(header));
    lines.push(Line::default());

    for row in (0..grid.rows()).rev() {
        let mut spans = Vec::with_capacity(grid.columns());
        for col in 0..grid.columns() {
            let (symbol, style) = match grid.occupant(col, row) {
                None => (" · ", Style::default().fg(Color::DarkGray)),
                Some(PlayerId::One) => (
                    " ● ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Some(PlayerId::Two) => (
                    " ● ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    lines
}
