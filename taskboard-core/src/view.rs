//! Which list is on screen, and how store events move it.

use crate::store::StoreEvent;

/// The list currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// The active task list.
    #[default]
    Active,
    /// The completed task list.
    Completed,
}

impl ViewMode {
    /// The other view.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Completed,
            Self::Completed => Self::Active,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Holds the current [`ViewMode`]. Last write wins.
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    mode: ViewMode,
}

impl ViewController {
    /// Creates a controller showing the active list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current view.
    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.mode
    }

    /// Sets the view unconditionally (tab clicks).
    pub const fn set_view(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Follows an applied store mutation.
    ///
    /// Must only be called for mutations that actually happened; skipped
    /// operations leave the view alone.
    pub const fn on_store_event(&mut self, event: &StoreEvent) {
        match event {
            StoreEvent::Added | StoreEvent::Restored => self.mode = ViewMode::Active,
            StoreEvent::Completed => self.mode = ViewMode::Completed,
            StoreEvent::Reordered | StoreEvent::Deleted { .. } => {}
        }
    }
}
