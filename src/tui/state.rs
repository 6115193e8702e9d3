//! Application state for the TUI.
//!
//! This module defines the state types that drive the interface:
//! - `AppState`: all mutable application state
//! - `FormState`: the three-field entry form
//! - `CardEditor`: in-flight edit of one existing card
//! - `InteractionMode`: current input mode

use super::input::TextInput;
use crate::auth::AuthState;
use crate::domain::{Field, ToolEntry, ToolFields};
use crate::notify::Notifier;

/// Number of cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// The primary application state.
///
/// Owned by `App` and updated in response to events and remote call results.
#[derive(Debug, Default)]
pub struct AppState {
    /// The tool list, in the order the store returned it plus local appends
    pub entries: Vec<ToolEntry>,
    /// Currently selected card index
    pub selected: Option<usize>,

    /// The new-tool entry form
    pub form: FormState,
    /// Set when a create request fails. Nothing reads this back; the
    /// failure stays invisible to the user.
    pub form_error: bool,

    /// Current interaction mode
    pub mode: InteractionMode,
    /// Sign-in state shown in the header
    pub auth: AuthState,
    /// Active toasts
    pub notifier: Notifier,

    /// Pending remote operation (processed by the runner)
    pub pending: Option<PendingAction>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected entry.
    pub fn selected_entry(&self) -> Option<&ToolEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    /// Select the next card, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) if i + 1 >= self.entries.len() => 0,
            Some(i) => i + 1,
        });
    }

    /// Select the previous card, wrapping at the start.
    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => self.entries.len() - 1,
            Some(0) => self.entries.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Move selection one grid row down, clamped to the last entry.
    pub fn select_row_down(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + GRID_COLUMNS).min(self.entries.len() - 1),
        });
    }

    /// Move selection one grid row up.
    pub fn select_row_up(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => i.saturating_sub(GRID_COLUMNS),
        });
    }

    /// Header hint for the auth affordance.
    pub fn auth_hint(&self) -> String {
        match self.auth.account() {
            Some(account) => format!("{} │ [s] sign out", account),
            None => "signed out │ sign in: trove login".to_string(),
        }
    }
}

/// The three-field entry form.
///
/// Each field owns its own buffer, so a keystroke into the focused field
/// cannot touch the other two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    title: TextInput,
    description: TextInput,
    url: TextInput,
    /// Which field receives keystrokes
    pub focus: Field,
}

impl FormState {
    /// Create an empty form focused on the title field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form pre-filled from an existing record's fields.
    pub fn prefilled(fields: &ToolFields) -> Self {
        Self {
            title: TextInput::with_content(fields.get(Field::Title).unwrap_or("")),
            description: TextInput::with_content(fields.get(Field::Description).unwrap_or("")),
            url: TextInput::with_content(fields.get(Field::Url).unwrap_or("")),
            focus: Field::Title,
        }
    }

    /// The buffer backing a field.
    pub fn input(&self, field: Field) -> &TextInput {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Url => &self.url,
        }
    }

    /// The mutable buffer backing a field.
    pub fn input_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Url => &mut self.url,
        }
    }

    /// The focused buffer.
    pub fn focused_mut(&mut self) -> &mut TextInput {
        self.input_mut(self.focus)
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Build the partial record to submit: exactly the three editable
    /// fields, copied from the buffers as-is. Empty strings are kept.
    pub fn fields(&self) -> ToolFields {
        let mut fields = ToolFields::new();
        fields.set(Field::Title, self.title.content());
        fields.set(Field::Description, self.description.content());
        fields.set(Field::Url, self.url.content());
        fields
    }

    /// Reset all three buffers to empty and refocus the title.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.url.clear();
        self.focus = Field::Title;
    }
}

/// In-flight edit of one existing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEditor {
    /// Index of the card being edited
    pub index: usize,
    /// The card's store identifier
    pub id: String,
    /// Field values when the editor was opened
    original: ToolFields,
    /// The edit buffers
    pub form: FormState,
}

impl CardEditor {
    /// Open an editor over an entry's current fields.
    pub fn open(index: usize, id: impl Into<String>, fields: &ToolFields) -> Self {
        Self {
            index,
            id: id.into(),
            original: fields.clone(),
            form: FormState::prefilled(fields),
        }
    }

    /// The partial set of field changes to send as a patch.
    pub fn changes(&self) -> ToolFields {
        self.form.fields().diff(&self.original)
    }
}

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Navigating the card grid
    #[default]
    Browse,
    /// Typing into the new-tool form
    FormInput,
    /// Editing one existing card
    CardEdit(CardEditor),
}

/// Remote operations queued by input handling, processed by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Create a document from the current form
    SubmitForm,
    /// Patch an existing document
    UpdateTool { id: String, changes: ToolFields },
    /// Remove the local session
    SignOut,
}
