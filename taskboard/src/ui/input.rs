//! Add-task prompt rendering.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::App;

/// Render the prompt and place the terminal cursor in it.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title("New task")
        .borders(Borders::ALL)
        .border_style(theme::highlighted());

    let paragraph = Paragraph::new(app.input.as_str())
        .style(theme::normal())
        .block(block);
    frame.render_widget(paragraph, area);

    let offset = u16::try_from(app.cursor_position).unwrap_or(u16::MAX);
    let max_x = area.right().saturating_sub(2);
    frame.set_cursor_position(Position::new(
        area.x.saturating_add(1).saturating_add(offset).min(max_x),
        area.y.saturating_add(1),
    ));
}
