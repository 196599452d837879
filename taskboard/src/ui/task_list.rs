//! Task list rendering for the current tab.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use taskboard_core::ViewMode;

use super::theme;
use crate::app::{App, Mode};

/// Render the visible list, highlighting the selection or drag state.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.board.view();
    let dragged = app.dragged_task().map(|t| t.id);
    let selected = app.selected_index();

    let items: Vec<ListItem> = app
        .board
        .visible()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let (marker, text_style) = match view {
                ViewMode::Active => ("\u{2261} ", theme::normal()),
                ViewMode::Completed => ("\u{2713} ", theme::completed()),
            };
            let line = Line::from(vec![
                Span::styled(marker, theme::highlighted()),
                Span::styled(task.text.as_str(), text_style),
            ]);

            let style = if dragged == Some(task.id) {
                theme::dragging()
            } else if dragged.is_some() && idx == selected {
                theme::drop_target()
            } else if idx == selected {
                theme::selected()
            } else {
                theme::normal()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let title = match (view, app.mode) {
        (_, Mode::Dragging { .. }) => "Tasks (dragging: Space to drop, Esc to cancel)",
        (ViewMode::Active, _) => "Tasks",
        (ViewMode::Completed, _) => "Completed Items",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if dragged.is_some() {
            theme::drop_target()
        } else {
            theme::normal()
        });

    let empty = items.is_empty();
    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected((!empty).then_some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}
