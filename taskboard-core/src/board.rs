//! The store and the view controller wired together.
//!
//! [`Board`] is what a presentation layer owns. Each mutation runs against
//! the [`TaskStore`]; when it applies, the resulting [`StoreEvent`] is fed
//! to the [`ViewController`] so the visible tab follows the task.

use crate::store::{Outcome, TaskStore};
use crate::task::{Task, TaskId};
use crate::view::{ViewController, ViewMode};

/// A store mutation, as data.
///
/// Lets UI handlers and queued callers share [`Board::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a task with the given text.
    Add(String),
    /// Complete an active task.
    Complete(TaskId),
    /// Restore a completed task.
    Restore(TaskId),
    /// Move `task` to the slot held by `target` in the active list.
    Reorder {
        /// The dragged task.
        task: TaskId,
        /// The task it was dropped on.
        target: TaskId,
    },
    /// Delete a task from either list.
    Delete(TaskId),
}

/// An owned copy of the board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Active tasks in display order.
    pub active: Vec<Task>,
    /// Completed tasks, newest first.
    pub completed: Vec<Task>,
    /// The view at the time of the snapshot.
    pub view: ViewMode,
}

/// Task lists plus the current view.
#[derive(Debug, Clone, Default)]
pub struct Board {
    store: TaskStore,
    view: ViewController,
}

impl Board {
    /// Creates an empty board on the active view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board whose active list is pre-seeded with `texts`.
    #[must_use]
    pub fn with_seed<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            store: TaskStore::with_seed(texts),
            view: ViewController::new(),
        }
    }

    /// Read access to the lists.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Active tasks in display order.
    #[must_use]
    pub fn active(&self) -> &[Task] {
        self.store.active()
    }

    /// Completed tasks, newest first.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        self.store.completed()
    }

    /// The list for the current view.
    #[must_use]
    pub fn visible(&self) -> &[Task] {
        self.store.list(self.view())
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view.view()
    }

    /// Sets the view (tab click).
    pub const fn set_view(&mut self, mode: ViewMode) {
        self.view.set_view(mode);
    }

    /// See [`TaskStore::add_task`].
    pub fn add_task(&mut self, text: &str) -> Outcome {
        let outcome = self.store.add_task(text);
        self.observe(outcome)
    }

    /// See [`TaskStore::complete_task`].
    pub fn complete_task(&mut self, id: TaskId) -> Outcome {
        let outcome = self.store.complete_task(id);
        self.observe(outcome)
    }

    /// See [`TaskStore::restore_task`].
    pub fn restore_task(&mut self, id: TaskId) -> Outcome {
        let outcome = self.store.restore_task(id);
        self.observe(outcome)
    }

    /// See [`TaskStore::reorder_active`].
    pub fn reorder_active(&mut self, id: TaskId, target: TaskId) -> Outcome {
        let outcome = self.store.reorder_active(id, target);
        self.observe(outcome)
    }

    /// See [`TaskStore::delete_task`].
    pub fn delete_task(&mut self, id: TaskId) -> Outcome {
        let outcome = self.store.delete_task(id);
        self.observe(outcome)
    }

    /// Runs a [`Command`].
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Add(text) => self.add_task(&text),
            Command::Complete(id) => self.complete_task(id),
            Command::Restore(id) => self.restore_task(id),
            Command::Reorder { task, target } => self.reorder_active(task, target),
            Command::Delete(id) => self.delete_task(id),
        }
    }

    /// Clones the current state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            active: self.store.active().to_vec(),
            completed: self.store.completed().to_vec(),
            view: self.view(),
        }
    }

    const fn observe(&mut self, outcome: Outcome) -> Outcome {
        if let Outcome::Applied(event) = &outcome {
            self.view.on_store_event(event);
        }
        outcome
    }
}
