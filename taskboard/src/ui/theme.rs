//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::Rgb(230, 241, 255);

/// Secondary foreground color (completed tasks, help text).
pub const FG_SECONDARY: Color = Color::Rgb(147, 164, 195);

/// Panel background color.
pub const BG_PANEL: Color = Color::Rgb(18, 24, 38);

/// Highlight color for selection and the active tab.
pub const HIGHLIGHT: Color = Color::Rgb(0, 229, 255);

/// Color for a task being dragged.
pub const DRAG: Color = Color::Rgb(255, 0, 255);

/// Color for completed-task accents.
pub const DONE: Color = Color::Rgb(57, 255, 20);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style.
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused borders, selected tab).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for the task being dragged.
#[must_use]
pub fn dragging() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(DRAG)
        .add_modifier(Modifier::BOLD)
}

/// Style for the drop target while dragging.
#[must_use]
pub fn drop_target() -> Style {
    Style::default()
        .fg(DRAG)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Style for completed task text.
#[must_use]
pub fn completed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Style for the status bar background.
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(FG_PRIMARY).bg(BG_PANEL)
}
