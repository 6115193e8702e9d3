//! Terminal User Interface for Trove.
//!
//! Renders the tool collection as a card grid with an entry form above it,
//! mirroring the hosted app's single-page layout:
//! - **Browse**: navigate cards, open the editor, sign out
//! - **Form**: type a new tool and submit it
//! - **Edit**: patch one existing card
//!
//! The TUI runs on tokio; the only suspension points are the remote store
//! calls.

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use input::TextInput;
pub use runner::TuiRunner;
pub use state::{AppState, CardEditor, FormState, InteractionMode, PendingAction};

use std::io::{Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::error::Result;

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

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Palette for the dark theme.
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const CARD_TITLE: Color = Color::Rgb(186, 135, 255); // Purple
    pub const CARD_URL: Color = Color::Rgb(100, 181, 246); // Blue
    pub const FOCUSED: Color = Color::Rgb(255, 215, 0); // Gold
    pub const TOAST_SUCCESS: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const TOAST_ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const DIM: Color = Color::DarkGray;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_defined() {
        // Just verify colors module is accessible
        let _ = colors::HEADER;
        let _ = colors::CARD_TITLE;
        let _ = colors::TOAST_SUCCESS;
        let _ = colors::TOAST_ERROR;
    }
}
