//! Terminal UI rendering.

pub mod input;
pub mod status_bar;
pub mod tabs;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::{App, Mode};

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let prompt_height = if app.mode == Mode::Input { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Tabs
            Constraint::Min(3),                // Task list
            Constraint::Length(prompt_height), // Add prompt
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    tabs::render(frame, chunks[0], app);
    task_list::render(frame, chunks[1], app);
    if app.mode == Mode::Input {
        input::render(frame, chunks[2], app);
    }
    status_bar::render(frame, chunks[3], app);
}
