//! The two task lists and the mutations that move tasks between them.
//!
//! `TaskStore` never fails from the caller's point of view. An operation
//! whose preconditions do not hold (unknown id, empty text, reorder onto
//! itself) returns [`Outcome::Skipped`] and changes nothing.

use crate::task::{Task, TaskId, TaskText};
use crate::view::ViewMode;

/// A mutation that was applied to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task was appended to the active list.
    Added,
    /// A task moved from the active list to the front of the completed list.
    Completed,
    /// A task moved from the completed list to the end of the active list.
    Restored,
    /// A task moved within the active list.
    Reordered,
    /// A task was removed outright.
    Deleted {
        /// Which list it was removed from.
        from: ViewMode,
    },
}

/// Why an operation did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// The text was empty after trimming.
    EmptyText,
    /// A referenced id is not in the list the operation reads from.
    UnknownTask,
    /// Reorder source and target are the same task.
    SameTask,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "empty text"),
            Self::UnknownTask => write!(f, "unknown task"),
            Self::SameTask => write!(f, "same task"),
        }
    }
}

/// Result of a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// State changed.
    Applied(StoreEvent),
    /// Preconditions failed; state is unchanged.
    Skipped(Skip),
}

impl Outcome {
    /// Returns `true` if the operation changed state.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns the applied event, if any.
    #[must_use]
    pub const fn event(&self) -> Option<StoreEvent> {
        match self {
            Self::Applied(event) => Some(*event),
            Self::Skipped(_) => None,
        }
    }
}

/// Owns the active list and the completed list.
///
/// Active tasks are kept in user order. Completed tasks are newest first.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    active: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose active list holds `texts` in order.
    ///
    /// Entries that are empty after trimming are dropped.
    #[must_use]
    pub fn with_seed<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let active = texts
            .into_iter()
            .filter_map(|raw| TaskText::new(raw.as_ref()).ok())
            .map(Task::new)
            .collect();
        Self {
            active,
            completed: Vec::new(),
        }
    }

    /// Active tasks in display order.
    #[must_use]
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Completed tasks, most recently completed first.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Tasks shown for `mode`.
    #[must_use]
    pub fn list(&self, mode: ViewMode) -> &[Task] {
        match mode {
            ViewMode::Active => &self.active,
            ViewMode::Completed => &self.completed,
        }
    }

    /// Total number of tasks across both lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.completed.len()
    }

    /// Returns `true` if both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.completed.is_empty()
    }

    /// Locates a task: which list holds it and at what index.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<(ViewMode, usize)> {
        if let Some(index) = position(&self.active, id) {
            return Some((ViewMode::Active, index));
        }
        position(&self.completed, id).map(|index| (ViewMode::Completed, index))
    }

    /// Looks up a task by id in either list.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        let (mode, index) = self.find(id)?;
        self.list(mode).get(index)
    }

    /// Appends a new task to the end of the active list.
    pub fn add_task(&mut self, text: &str) -> Outcome {
        let Ok(text) = TaskText::new(text) else {
            return Outcome::Skipped(Skip::EmptyText);
        };
        self.active.push(Task::new(text));
        Outcome::Applied(StoreEvent::Added)
    }

    /// Moves an active task to the front of the completed list under a new id.
    pub fn complete_task(&mut self, id: TaskId) -> Outcome {
        let Some(index) = position(&self.active, id) else {
            return Outcome::Skipped(Skip::UnknownTask);
        };
        let task = self.active.remove(index);
        self.completed.insert(0, task.recreate());
        Outcome::Applied(StoreEvent::Completed)
    }

    /// Moves a completed task to the end of the active list under a new id.
    pub fn restore_task(&mut self, id: TaskId) -> Outcome {
        let Some(index) = position(&self.completed, id) else {
            return Outcome::Skipped(Skip::UnknownTask);
        };
        let task = self.completed.remove(index);
        self.active.push(task.recreate());
        Outcome::Applied(StoreEvent::Restored)
    }

    /// Moves `id` to the slot currently held by `target` in the active list.
    ///
    /// This is a list move, not a swap: tasks between the two positions
    /// shift by one toward the vacated slot.
    pub fn reorder_active(&mut self, id: TaskId, target: TaskId) -> Outcome {
        if id == target {
            return Outcome::Skipped(Skip::SameTask);
        }
        let (Some(from), Some(to)) = (position(&self.active, id), position(&self.active, target))
        else {
            return Outcome::Skipped(Skip::UnknownTask);
        };
        let task = self.active.remove(from);
        self.active.insert(to, task);
        Outcome::Applied(StoreEvent::Reordered)
    }

    /// Removes a task from whichever list holds it.
    pub fn delete_task(&mut self, id: TaskId) -> Outcome {
        let Some((from, index)) = self.find(id) else {
            return Outcome::Skipped(Skip::UnknownTask);
        };
        match from {
            ViewMode::Active => self.active.remove(index),
            ViewMode::Completed => self.completed.remove(index),
        };
        Outcome::Applied(StoreEvent::Deleted { from })
    }
}

fn position(list: &[Task], id: TaskId) -> Option<usize> {
    list.iter().position(|t| t.id == id)
}
