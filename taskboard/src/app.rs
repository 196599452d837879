//! Application state and event handling.
//!
//! `App` owns the [`Board`] and translates key presses into board
//! operations. Keyboard dragging stands in for a pointer: `Space` grabs the
//! selected task, the cursor picks the drop target, and a second `Space`
//! drops it there.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskboard_core::{Board, Command, Outcome, StoreEvent, Task, TaskId, ViewMode};

/// What keys currently do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the current list.
    Browse,
    /// Typing the text of a new task.
    Input,
    /// Carrying an active task to a new position.
    Dragging {
        /// The grabbed task.
        task: TaskId,
    },
}

/// Main application state.
pub struct App {
    /// Task lists and current view.
    pub board: Board,
    /// Current key mode.
    pub mode: Mode,
    /// Text typed into the add prompt.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Selected row in the active list.
    pub active_cursor: usize,
    /// Selected row in the completed list.
    pub completed_cursor: usize,
    /// Last action, shown in the status bar.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an application around an existing board.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self {
            board,
            mode: Mode::Browse,
            input: String::new(),
            cursor_position: 0,
            active_cursor: 0,
            completed_cursor: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Creates an application whose active list starts with `seed`.
    #[must_use]
    pub fn with_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Board::with_seed(seed))
    }

    /// Index of the selected row in the visible list.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        match self.board.view() {
            ViewMode::Active => self.active_cursor,
            ViewMode::Completed => self.completed_cursor,
        }
    }

    /// The selected task in the visible list, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.board.visible().get(self.selected_index())
    }

    /// The task being dragged, if any.
    #[must_use]
    pub fn dragged_task(&self) -> Option<&Task> {
        match self.mode {
            Mode::Dragging { task } => self.board.active().iter().find(|t| t.id == task),
            Mode::Browse | Mode::Input => None,
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Input => self.handle_input_key(key),
            Mode::Dragging { task } => self.handle_drag_key(key, task),
        }
    }

    /// Runs a board command and keeps cursors and status in step with it.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = self.board.apply(command);
        match outcome {
            Outcome::Applied(event) => {
                tracing::info!(?event, view = %self.board.view(), "board updated");
                self.follow(event);
            }
            Outcome::Skipped(reason) => {
                tracing::debug!(%reason, "board operation skipped");
            }
        }
        self.clamp_cursors();
        outcome
    }

    /// Switches tabs (a tab click).
    pub fn set_view(&mut self, mode: ViewMode) {
        tracing::debug!(view = %mode, "view selected");
        self.board.set_view(mode);
        self.clamp_cursors();
    }

    // -----------------------------------------------------------------------
    // Key handlers
    // -----------------------------------------------------------------------

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let view = self.board.view();
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.set_view(view.toggled()),
            KeyCode::Char('1') => self.set_view(ViewMode::Active),
            KeyCode::Char('2') => self.set_view(ViewMode::Completed),
            KeyCode::Up if shift => self.nudge_selected(-1),
            KeyCode::Down if shift => self.nudge_selected(1),
            KeyCode::Char('K') => self.nudge_selected(-1),
            KeyCode::Char('J') => self.nudge_selected(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Home => self.set_cursor(0),
            KeyCode::End => self.set_cursor(self.board.visible().len().saturating_sub(1)),
            KeyCode::Char('a') => self.open_prompt(),
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    let _ = self.dispatch(Command::Delete(id));
                }
            }
            _ => match view {
                ViewMode::Active => self.handle_active_key(key),
                ViewMode::Completed => self.handle_completed_key(key),
            },
        }
    }

    fn handle_active_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('+') => self.open_prompt(),
            KeyCode::Char('c' | '-') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    let _ = self.dispatch(Command::Complete(id));
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    tracing::debug!(task = %id, "drag started");
                    self.mode = Mode::Dragging { task: id };
                }
            }
            _ => {}
        }
    }

    fn handle_completed_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('r' | '+') | KeyCode::Enter = key.code
            && let Some(id) = self.selected_id()
        {
            let _ = self.dispatch(Command::Restore(id));
        }
    }

    fn handle_drag_key(&mut self, key: KeyEvent, task: TaskId) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.mode = Mode::Browse;
                let target = self.board.active().get(self.active_cursor).map(|t| t.id);
                if let Some(target) = target {
                    let _ = self.dispatch(Command::Reorder { task, target });
                }
            }
            KeyCode::Esc => {
                tracing::debug!(task = %task, "drag cancelled");
                self.mode = Mode::Browse;
                if let Some(index) = self.board.active().iter().position(|t| t.id == task) {
                    self.active_cursor = index;
                }
            }
            _ => {}
        }
    }

    /// Handle key event when the add prompt is open.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => self.close_prompt(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_input_cursor_left(),
            KeyCode::Right => self.move_input_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Board helpers
    // -----------------------------------------------------------------------

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Moves the selected active task one slot, using its neighbour as the
    /// drop target.
    fn nudge_selected(&mut self, delta: isize) {
        if self.board.view() != ViewMode::Active {
            return;
        }
        let Some(to) = self.active_cursor.checked_add_signed(delta) else {
            return;
        };
        let active = self.board.active();
        let (Some(task), Some(target)) = (active.get(self.active_cursor), active.get(to)) else {
            return;
        };
        let command = Command::Reorder {
            task: task.id,
            target: target.id,
        };
        if self.dispatch(command).is_applied() {
            self.active_cursor = to;
        }
    }

    /// Places the cursors after an applied mutation.
    fn follow(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Added => {
                self.active_cursor = self.board.active().len().saturating_sub(1);
                self.status = self.board.active().last().map(|t| format!("Added: {}", t.text));
            }
            StoreEvent::Completed => {
                self.completed_cursor = 0;
                self.status = self
                    .board
                    .completed()
                    .first()
                    .map(|t| format!("Completed: {}", t.text));
            }
            StoreEvent::Restored => {
                self.active_cursor = self.board.active().len().saturating_sub(1);
                self.status = self.board.active().last().map(|t| format!("Restored: {}", t.text));
            }
            StoreEvent::Reordered => {}
            StoreEvent::Deleted { .. } => self.status = Some("Deleted task".to_string()),
        }
    }

    fn clamp_cursors(&mut self) {
        let last_active = self.board.active().len().saturating_sub(1);
        let last_completed = self.board.completed().len().saturating_sub(1);
        self.active_cursor = self.active_cursor.min(last_active);
        self.completed_cursor = self.completed_cursor.min(last_completed);
    }

    fn set_cursor(&mut self, index: usize) {
        match self.board.view() {
            ViewMode::Active => self.active_cursor = index,
            ViewMode::Completed => self.completed_cursor = index,
        }
        self.clamp_cursors();
    }

    fn move_cursor(&mut self, delta: isize) {
        let index = self.selected_index().saturating_add_signed(delta);
        self.set_cursor(index);
    }

    // -----------------------------------------------------------------------
    // Prompt editing
    // -----------------------------------------------------------------------

    fn open_prompt(&mut self) {
        self.mode = Mode::Input;
        self.input.clear();
        self.cursor_position = 0;
    }

    fn close_prompt(&mut self) {
        self.mode = Mode::Browse;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Submit the prompt text as a new task. Blank text adds nothing.
    fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.close_prompt();
        let _ = self.dispatch(Command::Add(text));
    }

    /// Byte offset of the character at `cursor_position`.
    fn input_byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let index = self.input_byte_index();
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let index = self.input_byte_index();
            self.input.remove(index);
        }
    }

    const fn move_input_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    fn move_input_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Board::new())
    }
}
