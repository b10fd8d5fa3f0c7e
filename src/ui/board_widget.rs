use crate::game::{Board, Cell, Token, COLS, ROWS};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Display color of a token's pieces.
pub fn token_color(token: Token) -> Color {
    match token {
        Token::PlayerA => Color::Red,
        Token::PlayerB => Color::Yellow,
    }
}

/// Symbol and color for one cell.
pub fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::PlayerA => (" \u{25cf} ", token_color(Token::PlayerA)),
        Cell::PlayerB => (" \u{25cf} ", token_color(Token::PlayerB)),
    };
    Span::styled(symbol, Style::default().fg(color))
}

/// Marker drawn in the cell the next piece would land in.
pub fn preview_span(token: Token) -> Span<'static> {
    Span::styled(" \u{25cb} ", Style::default().fg(token_color(token)))
}

/// Render a compact board (no column selector, no borders) into the given area.
pub fn render_board_compact(frame: &mut Frame, board: &Board, area: Rect) {
    let mut lines = Vec::new();

    for row in 0..ROWS {
        let spans: Vec<Span> = (0..COLS).map(|col| cell_span(board.get(row, col))).collect();
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines);
    frame.render_widget(widget, area);
}
