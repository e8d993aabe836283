//! TUI Application
//!
//! Holds the directory state plus the bits of UI state around it (selection,
//! spinner frame, status line) and maps keys to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{DescriptionUpdate, DirectoryState, ToolEntry};

/// Braille spinner frames for loading rows
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the runner should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Export,
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line message shown under the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Main TUI application state
#[derive(Debug)]
pub struct App {
    directory: DirectoryState,
    selected: usize,
    spinner_frame: usize,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    /// Create an app around an initial directory state
    pub fn new(directory: DirectoryState) -> Self {
        Self {
            directory,
            selected: 0,
            spinner_frame: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Currently highlighted row, if the directory is non-empty
    pub fn selected_entry(&self) -> Option<&ToolEntry> {
        self.directory.entries().get(self.selected)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Export is offered only once every row has settled
    pub fn can_export(&self) -> bool {
        !self.directory.is_loading()
    }

    /// Current spinner glyph
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Advance the spinner one frame
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Fold a pipeline update into the directory
    pub fn apply_update(&mut self, update: &DescriptionUpdate) {
        self.directory.apply(update);
        if !self.directory.is_loading() {
            self.set_status(StatusMessage::info("All descriptions loaded. Press d to download CSV."));
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.directory.len() {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Handle a key press and report what the runner should do.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                Action::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Action::Quit
            }
            KeyCode::Char('d') | KeyCode::Char('e') => {
                if self.can_export() {
                    Action::Export
                } else {
                    self.set_status(StatusMessage::info(format!(
                        "Download disabled: {} description(s) still generating",
                        self.directory.pending_count()
                    )));
                    Action::None
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Action::None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.directory.len().saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }
}
