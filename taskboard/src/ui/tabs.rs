//! Tab bar: one tab per list, with counts.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
};
use taskboard_core::ViewMode;

use super::theme;
use crate::app::App;

/// Render the tab bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let titles = vec![
        Line::from(format!("Tasks ({})", app.board.active().len())),
        Line::from(format!("Completed Items ({})", app.board.completed().len())),
    ];
    let selected = match app.board.view() {
        ViewMode::Active => 0,
        ViewMode::Completed => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" TASK BOARD ")
                .borders(Borders::ALL)
                .border_style(theme::highlighted()),
        )
        .style(theme::dimmed())
        .highlight_style(theme::highlighted())
        .select(selected);

    frame.render_widget(tabs, area);
}
