//! Core state machine for `Taskboard`.
//!
//! Two ordered task lists (active and completed), the moves between them,
//! the drag-reorder operation, and the view mode that follows them. Every
//! operation is infallible from the caller's side: a stale or invalid
//! reference yields [`Outcome::Skipped`] and leaves state untouched.

pub mod board;
pub mod store;
pub mod task;
pub mod view;

pub use board::{Board, BoardSnapshot, Command};
pub use store::{Outcome, Skip, StoreEvent, TaskStore};
pub use task::{Task, TaskId, TaskText, TaskTextError};
pub use view::{ViewController, ViewMode};
