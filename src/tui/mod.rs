//! Terminal User Interface for Tooldex.
//!
//! A single full-screen table of tools. Rows fill in as the description
//! pipeline reports back; the CSV download unlocks once every row is settled.

mod app;
mod events;
mod runner;
mod views;

pub use app::{Action, App, StatusKind, StatusMessage};
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use views::render;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal before any panic message is printed.
///
/// Chains onto the existing hook so the default report still appears, just
/// on a usable screen.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Palette
pub mod colors {
    use ratatui::style::Color;

    pub const LOADING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const READY: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const FAILED: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const LINK: Color = Color::Rgb(96, 165, 250); // Blue 400
    pub const SELECTED: Color = Color::Rgb(31, 41, 55); // Gray 800
    pub const DIM: Color = Color::DarkGray;
}
