use super::board_widget::render_board_compact;
use super::game_view::status_text;
use super::App;
use crate::game::{COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Result
            Constraint::Length(ROWS as u16), // Final board
            Constraint::Min(0),
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let banner = Paragraph::new(status_text(app.session()))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(banner, chunks[0]);

    // Center the final position under the banner
    let [board_area] = Layout::horizontal([Constraint::Length(COLS as u16 * 3)])
        .flex(Flex::Center)
        .areas(chunks[1]);
    render_board_compact(frame, app.session().board(), board_area);

    let controls = Paragraph::new("Enter: Play Again  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[3]);
}
