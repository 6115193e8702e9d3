//! TUI application: input handling and the record data flows.
//!
//! `App` owns `AppState` and translates key events into state changes and
//! pending remote operations. The async flows (initial fetch, create,
//! patch) live here too, against the injected `DocumentStore` capability,
//! so they are testable without a terminal.

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{error, info, warn};

use super::state::{AppState, CardEditor, InteractionMode, PendingAction};
use crate::auth::{AuthState, Session};
use crate::domain::{ToolEntry, ToolFields};
use crate::error::Result;
use crate::store::DocumentStore;

/// Main TUI application.
pub struct App {
    state: AppState,
}

impl App {
    /// Create an application with the given sign-in state.
    pub fn new(auth: AuthState) -> Self {
        let mut state = AppState::new();
        state.auth = auth;
        Self { state }
    }

    /// Get a reference to the state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a mutable reference to the state.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Route a key event according to the current interaction mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return;
        }

        match &self.state.mode {
            InteractionMode::Browse => self.handle_browse_key(key),
            InteractionMode::FormInput => self.handle_form_key(key),
            InteractionMode::CardEdit(_) => self.handle_edit_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('n') | KeyCode::Char('a') => {
                self.state.mode = InteractionMode::FormInput;
            }
            KeyCode::Char('e') | KeyCode::Enter => self.open_editor(),
            KeyCode::Char('s') => {
                if self.state.auth.is_signed_in() {
                    self.state.pending = Some(PendingAction::SignOut);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.state.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.state.select_next(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_row_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_row_up(),
            _ => {}
        }
    }

    /// Open the editor over the selected card.
    ///
    /// Locally appended entries have no identifier to patch against yet, so
    /// they cannot be edited until the next full reload.
    fn open_editor(&mut self) {
        let Some(index) = self.state.selected else {
            return;
        };
        let Some(entry) = self.state.entries.get(index) else {
            return;
        };
        match &entry.id {
            Some(id) => {
                self.state.mode =
                    InteractionMode::CardEdit(CardEditor::open(index, id, &entry.fields));
            }
            None => warn!("cannot edit a tool the store has not assigned an id to yet"),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.mode = InteractionMode::Browse,
            KeyCode::Enter => self.state.pending = Some(PendingAction::SubmitForm),
            KeyCode::Tab | KeyCode::Down => self.state.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.focus_prev(),
            _ => {
                self.state.form.focused_mut().handle_key(&key);
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.mode = InteractionMode::Browse,
            KeyCode::Enter => {
                if let InteractionMode::CardEdit(editor) = std::mem::take(&mut self.state.mode) {
                    self.state.pending = Some(PendingAction::UpdateTool {
                        id: editor.id.clone(),
                        changes: editor.changes(),
                    });
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                if let InteractionMode::CardEdit(editor) = &mut self.state.mode {
                    editor.form.focus_next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let InteractionMode::CardEdit(editor) = &mut self.state.mode {
                    editor.form.focus_prev();
                }
            }
            _ => {
                if let InteractionMode::CardEdit(editor) = &mut self.state.mode {
                    editor.form.focused_mut().handle_key(&key);
                }
            }
        }
    }

    /// Fetch the whole collection once and populate the list.
    ///
    /// Called on startup only. A failure here is deliberately not caught:
    /// it propagates out of the event loop.
    pub async fn load_collection(&mut self, store: &dyn DocumentStore) -> Result<()> {
        let docs = store.list().await?;
        info!("loaded {} tools from the collection", docs.len());
        self.state.entries = docs
            .into_iter()
            .map(|d| ToolEntry::fetched(d.id, d.fields))
            .collect();
        Ok(())
    }

    /// Process the queued remote operation, if any.
    pub async fn process_pending(&mut self, store: &dyn DocumentStore, session_path: &Path) {
        let Some(action) = self.state.pending.take() else {
            return;
        };
        match action {
            PendingAction::SubmitForm => self.submit_form(store).await,
            PendingAction::UpdateTool { id, changes } => {
                self.update_tool(store, &id, changes).await;
            }
            PendingAction::SignOut => self.sign_out(session_path),
        }
    }

    /// Create a document from the current form.
    ///
    /// On success the submitted copy is appended as-is; the id the store
    /// assigned is not carried into local state. On failure only the
    /// form-error flag is raised.
    async fn submit_form(&mut self, store: &dyn DocumentStore) {
        let fields = self.state.form.fields();
        match store.create(&fields).await {
            Ok(_) => {
                self.state.notifier.success("Saved the tool successfully!");
                self.state.entries.push(ToolEntry::submitted(fields));
                self.state.form.clear();
            }
            Err(_) => {
                self.state.form_error = true;
            }
        }
    }

    /// Patch an existing document.
    ///
    /// The local copy is left untouched either way; the grid keeps showing
    /// the pre-patch values until the next full reload.
    async fn update_tool(&mut self, store: &dyn DocumentStore, id: &str, changes: ToolFields) {
        match store.patch(id, &changes).await {
            Ok(()) => self.state.notifier.success("Updated the tool successfully!"),
            Err(e) => error!("failed to update tool {}: {}", id, e),
        }
    }

    /// Remove the local session and flip the header affordance.
    fn sign_out(&mut self, session_path: &Path) {
        if let Err(e) = Session::clear(session_path) {
            warn!("failed to remove session file: {}", e);
            return;
        }
        info!("signed out");
        self.state.auth = AuthState::SignedOut;
    }
}
