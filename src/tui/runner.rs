//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, event handler and the receiving end
//! of the pipeline's update channel. It runs the main loop:
//! drain updates → render → handle events → process actions → repeat.

use std::path::PathBuf;

use eyre::Result;
use log::{error, info};
use tokio::sync::mpsc::{self, error::TryRecvError};

use super::Tui;
use super::app::{Action, App, StatusMessage};
use super::events::{Event, EventHandler};
use super::views::render;
use crate::domain::DescriptionUpdate;
use crate::export;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
    /// `None` once the pipeline has finished and closed the channel
    updates: Option<mpsc::Receiver<DescriptionUpdate>>,
    export_dir: PathBuf,
}

impl TuiRunner {
    /// Create a new TUI runner.
    pub fn new(
        terminal: Tui,
        app: App,
        event_handler: EventHandler,
        updates: mpsc::Receiver<DescriptionUpdate>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            terminal,
            app,
            event_handler,
            updates: Some(updates),
            export_dir,
        }
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            // 1. Apply whatever the pipeline has published
            drain_updates(&mut self.app, &mut self.updates);

            // 2. Render current state
            self.terminal.draw(|f| render(&self.app, f))?;

            // 3. Handle events (keyboard, tick)
            match self.event_handler.next().await? {
                Event::Key(key) => {
                    let action = self.app.handle_key(key);
                    self.process_action(action);
                }
                Event::Tick => self.app.tick(),
                Event::Resize(_, _) => {}
            }

            // 4. Check for quit
            if self.app.should_quit() {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }

    fn process_action(&mut self, action: Action) {
        match action {
            Action::Export => {
                let status = export_status(&self.app, &self.export_dir);
                self.app.set_status(status);
            }
            Action::Quit | Action::None => {}
        }
    }
}

/// Apply every update currently queued, without waiting.
///
/// Drops the receiver once the pipeline side has closed it.
pub(crate) fn drain_updates(app: &mut App, updates: &mut Option<mpsc::Receiver<DescriptionUpdate>>) -> usize {
    let Some(rx) = updates else {
        return 0;
    };

    let mut applied = 0;
    loop {
        match rx.try_recv() {
            Ok(update) => {
                app.apply_update(&update);
                applied += 1;
            }
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                info!("Description pipeline closed its channel");
                *updates = None;
                break;
            }
        }
    }
    applied
}

/// Export the current snapshot and describe the outcome for the status line
pub(crate) fn export_status(app: &App, dir: &std::path::Path) -> StatusMessage {
    match export::export_to_dir(app.directory(), dir) {
        Ok(path) => StatusMessage::success(format!("Saved {}", path.display())),
        Err(e) => {
            error!("CSV export failed: {}", e);
            StatusMessage::error(format!("Export failed: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectoryState, ToolEntry};
    use crate::tui::StatusKind;

    fn app() -> App {
        App::new(DirectoryState::from_entries(vec![
            ToolEntry::new("A", "https://a/"),
            ToolEntry::new("B", "https://b/"),
        ]))
    }

    #[tokio::test]
    async fn test_drain_updates_applies_in_order() {
        let mut app = app();
        let (tx, rx) = mpsc::channel(4);
        let mut updates = Some(rx);

        tx.send(DescriptionUpdate::described("A", "a")).await.unwrap();
        assert_eq!(drain_updates(&mut app, &mut updates), 1);
        assert!(app.directory().is_loading());

        tx.send(DescriptionUpdate::failed("B", "x")).await.unwrap();
        drop(tx);
        assert_eq!(drain_updates(&mut app, &mut updates), 1);
        assert!(!app.directory().is_loading());

        // Next drain notices the closed channel
        assert_eq!(drain_updates(&mut app, &mut updates), 0);
        assert!(updates.is_none());
    }

    #[test]
    fn test_export_status_success() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app();
        app.apply_update(&DescriptionUpdate::described("A", "a"));
        app.apply_update(&DescriptionUpdate::described("B", "b"));

        let status = export_status(&app, dir.path());
        assert_eq!(status.kind, StatusKind::Success);
        assert!(dir.path().join(export::EXPORT_FILENAME).exists());
    }

    #[test]
    fn test_export_status_while_loading() {
        let dir = tempfile::tempdir().unwrap();
        let status = export_status(&app(), dir.path());
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("still loading"));
    }
}
