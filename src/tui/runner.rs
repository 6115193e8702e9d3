//! TUI runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! page's control flow: fetch the collection once, then render, handle
//! events, and process pending remote operations until quit.

use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use crate::auth::AuthState;
use crate::error::Result;
use crate::store::DocumentStore;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    /// The terminal instance
    terminal: Tui,
    /// Application state and input handling
    app: App,
    /// Event handler for keyboard and tick events
    event_handler: EventHandler,
    /// The injected store capability
    store: Arc<dyn DocumentStore>,
    /// Where the session file lives, for sign-out
    session_path: PathBuf,
}

impl TuiRunner {
    /// Create a new TUI runner.
    ///
    /// Store and auth state are injected here, at the composition root;
    /// nothing below reaches for them ambiently.
    pub fn new(
        terminal: Tui,
        store: Arc<dyn DocumentStore>,
        auth: AuthState,
        session_path: PathBuf,
        tick_rate_ms: u64,
    ) -> Self {
        Self {
            terminal,
            app: App::new(auth),
            event_handler: EventHandler::new(tick_rate_ms),
            store,
            session_path,
        }
    }

    /// Get a reference to the app.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("starting TUI main loop");

        // One unconditional fetch of the whole collection. There is no
        // catch here: a failure aborts the run.
        self.app.load_collection(self.store.as_ref()).await?;

        loop {
            // 1. Render current state
            self.terminal.draw(|f| render(self.app.state(), f))?;

            // 2. Handle events (keyboard, tick)
            match self.event_handler.next().await? {
                Event::Key(key) => self.app.handle_key(key),
                Event::Tick => self.app.state_mut().notifier.prune(),
                Event::Resize(_, _) => {
                    // Terminal will handle resize on next draw
                }
            }

            // 3. Process the pending remote operation, if any
            self.app
                .process_pending(self.store.as_ref(), &self.session_path)
                .await;

            // 4. Check for quit
            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}
