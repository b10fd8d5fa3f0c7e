use super::app::NameField;
use super::board_widget::token_color;
use super::App;
use crate::game::Token;
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
            Constraint::Length(3), // Title
            Constraint::Length(3), // Player 1
            Constraint::Length(3), // Player 2
            Constraint::Min(0),
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Enter player names")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(title, chunks[0]);

    render_field(frame, app, NameField::First, Token::PlayerA, chunks[1]);
    render_field(frame, app, NameField::Second, Token::PlayerB, chunks[2]);

    let controls = Paragraph::new("Tab: Switch field  |  Enter: Start  |  Esc: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[4]);
}

fn render_field(frame: &mut Frame, app: &App, field: NameField, token: Token, area: Rect) {
    let focused = app.focused_field() == field;
    let input = app.name_input(field);

    let mut spans = Vec::new();
    if input.is_empty() && !focused {
        // Placeholder shows what a blank name becomes
        spans.push(Span::styled(
            token.default_name(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(input.to_string()));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let title = Span::styled(
        format!("{} ({})", token.default_name(), token.color_name()),
        Style::default().fg(token_color(token)),
    );

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(widget, area);
}
