//! Task records and their validated text.

use uuid::Uuid;

/// Unique identifier for a task record, based on UUID v7.
///
/// A fresh id is minted every time a record is created, including when a
/// task moves between the active and completed lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from constructing a [`TaskText`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskTextError {
    /// The text was empty or whitespace only.
    #[error("task text cannot be empty")]
    Empty,
}

/// Task text: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskText(String);

impl TaskText {
    /// Trims surrounding whitespace and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTextError::Empty`] if nothing is left after trimming.
    pub fn new(raw: &str) -> Result<Self, TaskTextError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskTextError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for TaskText {
    type Error = TaskTextError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single task record.
///
/// Records are immutable once created. Moving a task to the other list
/// creates a new record via [`Task::recreate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Identifier, unique for the life of the process.
    pub id: TaskId,
    /// What the task says.
    pub text: TaskText,
}

impl Task {
    /// Creates a record with a freshly minted id.
    #[must_use]
    pub fn new(text: TaskText) -> Self {
        Self {
            id: TaskId::new(),
            text,
        }
    }

    /// Consumes this record and returns a new one with the same text and a
    /// fresh id.
    #[must_use]
    pub fn recreate(self) -> Self {
        Self::new(self.text)
    }
}
