use super::board_widget::{cell_span, preview_span, token_color};
use super::App;
use crate::game::{GameOutcome, GameSession, Phase, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, app.session(), chunks[0]);
    render_board(frame, app, chunks[1]);
    render_controls(frame, app.restart_available(), chunks[2]);
}

/// Turn or result text shown above the board.
pub fn status_text(session: &GameSession) -> String {
    match session.phase() {
        Phase::Finished(GameOutcome::Draw) => "It's a Draw!".to_string(),
        Phase::Finished(GameOutcome::Winner(_)) => {
            format!("{} Wins!", session.winner_name().unwrap_or_default())
        }
        Phase::Playing | Phase::Setup => {
            format!("{}'s Turn", session.current_player_name().unwrap_or_default())
        }
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let color = match session.phase() {
        Phase::Playing => token_color(session.current_turn()),
        _ => Color::White,
    };

    let header = Paragraph::new(status_text(session))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let selected_column = app.selected_column();
    let preview = if app.show_preview() {
        session
            .preview_row(selected_column)
            .map(|row| (row, selected_column))
    } else {
        None
    };

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            if preview == Some((row, col)) {
                row_spans.push(preview_span(session.current_turn()));
            } else {
                row_spans.push(cell_span(session.cell_at(row, col)));
            }
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_controls(frame: &mut Frame, restart_available: bool, area: Rect) {
    let mut text = String::from("←/→ or 1-7: Select  |  Enter: Drop");
    if restart_available {
        text.push_str("  |  R: Restart");
    }
    text.push_str("  |  Q: Quit");

    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
