//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use taskboard_core::ViewMode;

use super::theme;
use crate::app::{App, Mode};

/// Key help for the current mode and tab.
#[must_use]
pub const fn help_text(mode: Mode, view: ViewMode) -> &'static str {
    match (mode, view) {
        (Mode::Input, _) => "Enter: add | Esc: cancel | \u{2190}\u{2192}: move cursor",
        (Mode::Dragging { .. }, _) => "\u{2191}\u{2193}/jk: choose slot | Space: drop | Esc: cancel",
        (Mode::Browse, ViewMode::Active) => {
            "a/+: add | c/-: complete | Space: drag | J/K: nudge | x: delete | Tab: switch | q: quit"
        }
        (Mode::Browse, ViewMode::Completed) => {
            "a: add | r/+: restore | x: delete | Tab: switch | q: quit"
        }
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            concat!("Taskboard v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
    ];
    if let Some(status) = &app.status {
        spans.push(Span::styled(status.as_str(), theme::normal().fg(theme::DONE)));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(
        help_text(app.mode, app.board.view()),
        theme::dimmed(),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
