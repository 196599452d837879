//! Serialized async access to a [`Board`].
//!
//! [`BoardService::spawn`] moves a board into a tokio task that owns it
//! and drains a bounded queue of requests one at a time, so every mutation
//! runs to completion before the next one starts. Callers hold cheap,
//! cloneable [`BoardHandle`]s.
//!
//! ```text
//! BoardHandle ─── Request ──→  service task (owns Board)
//!             ←── oneshot ───
//! ```

use tokio::sync::{mpsc, oneshot};

use taskboard_core::{Board, BoardSnapshot, Command, Outcome, TaskId, ViewMode};

/// Default request queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Errors returned by a [`BoardHandle`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The service task has stopped.
    #[error("board service is closed")]
    Closed,
}

/// A request to the service task.
#[derive(Debug)]
enum Request {
    Apply {
        command: Command,
        reply: oneshot::Sender<Outcome>,
    },
    SetView {
        mode: ViewMode,
        reply: oneshot::Sender<()>,
    },
    Snapshot {
        reply: oneshot::Sender<BoardSnapshot>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

/// Entry point for spawning the service task.
pub struct BoardService;

impl BoardService {
    /// Spawns the service task on the current tokio runtime.
    ///
    /// The task ends once every handle has been dropped, or on
    /// [`BoardHandle::shutdown`].
    #[must_use]
    pub fn spawn(board: Board, capacity: usize) -> BoardHandle {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        tokio::spawn(run(board, rx));
        BoardHandle { tx }
    }
}

async fn run(mut board: Board, mut rx: mpsc::Receiver<Request>) {
    tracing::debug!("board service started");
    while let Some(request) = rx.recv().await {
        match request {
            Request::Apply { command, reply } => {
                let outcome = board.apply(command);
                tracing::debug!(?outcome, "board service applied command");
                // The caller may have stopped waiting; the mutation stands.
                let _ = reply.send(outcome);
            }
            Request::SetView { mode, reply } => {
                board.set_view(mode);
                let _ = reply.send(());
            }
            Request::Snapshot { reply } => {
                let _ = reply.send(board.snapshot());
            }
            Request::Shutdown { reply } => {
                rx.close();
                let _ = reply.send(());
                break;
            }
        }
    }
    tracing::debug!("board service stopped");
}

/// Cloneable handle to a running board service.
#[derive(Debug, Clone)]
pub struct BoardHandle {
    tx: mpsc::Sender<Request>,
}

impl BoardHandle {
    /// Queues a command and waits for its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task has stopped.
    pub async fn apply(&self, command: Command) -> Result<Outcome, ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.send(Request::Apply { command, reply }).await?;
        rx.await.map_err(|_| ServiceError::Closed)
    }

    /// Queues `add_task`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task has stopped.
    pub async fn add_task(&self, text: impl Into<String>) -> Result<Outcome, ServiceError> {
        self.apply(Command::Add(text.into())).await
    }

    /// Queues `complete_task`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task has stopped.
    pub async fn complete_task(&self, id: TaskId) -> Result<Outcome, ServiceError> {
        self.apply(Command::Complete(id)).await
    }

    /// Queues `restore_task`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task has stopped.
    pub async fn restore_task(&self, id: TaskId) -> Result<Outcome, ServiceError> {
        self.apply(Command::Restore(id)).await
    }

    /// Queues `reorder_active`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task has stopped.
    pub async fn reorder_active(
        &self,
        task: TaskId,
        target: TaskId,
    ) -> Result<Outcome, ServiceError> {
        self.apply(Command::Reorder { task, target }).await
    }

    /// Queues `delete_task`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task has stopped.
    pub async fn delete_task(&self, id: TaskId) -> Result<Outcome, ServiceError> {
        self.apply(Command::Delete(id)).await
    }

    /// Sets the view.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task has stopped.
    pub async fn set_view(&self, mode: ViewMode) -> Result<(), ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.send(Request::SetView { mode, reply }).await?;
        rx.await.map_err(|_| ServiceError::Closed)
    }

    /// Returns a copy of the current state.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task has stopped.
    pub async fn snapshot(&self) -> Result<BoardSnapshot, ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.send(Request::Snapshot { reply }).await?;
        rx.await.map_err(|_| ServiceError::Closed)
    }

    /// Stops the service task. Requests still queued are dropped and their
    /// callers see [`ServiceError::Closed`], as do all later calls.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Closed`] if the service task already stopped.
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.send(Request::Shutdown { reply }).await?;
        rx.await.map_err(|_| ServiceError::Closed)
    }

    async fn send(&self, request: Request) -> Result<(), ServiceError> {
        self.tx.send(request).await.map_err(|_| ServiceError::Closed)
    }
}
