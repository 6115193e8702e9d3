//! Collection round-trip integration tests
//!
//! Exercises the create/edit data flows end to end against the in-memory
//! store, plus session persistence.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;
use trove::auth::{AuthState, Session};
use trove::domain::{Field, ToolEntry, ToolFields};
use trove::error::Result;
use trove::store::{Document, DocumentStore, MemoryStore};
use trove::tui::{App, InteractionMode};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn fields(title: &str, description: &str, url: &str) -> ToolFields {
    let mut f = ToolFields::new();
    f.set(Field::Title, title);
    f.set(Field::Description, description);
    f.set(Field::Url, url);
    f
}

/// Integration test: a full add-then-edit session against the store
#[tokio::test]
async fn test_add_then_edit_flow() -> Result<()> {
    let store = MemoryStore::with_documents(vec![Document {
        id: "seed-1".to_string(),
        fields: fields("ripgrep", "fast grep", "https://example.com/rg"),
    }]);
    let session_dir = TempDir::new().unwrap();
    let session_path = session_dir.path().join("session.json");

    let mut app = App::new(AuthState::SignedOut);
    app.load_collection(&store).await?;
    assert_eq!(app.state().entries.len(), 1);

    // Add a new tool through the form
    app.handle_key(key(KeyCode::Char('n')));
    type_text(&mut app, "fd");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "fast find");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "https://example.com/fd");
    app.handle_key(key(KeyCode::Enter));
    app.process_pending(&store, &session_path).await;

    // Remote store has both; the local append has no id
    assert_eq!(store.documents().len(), 2);
    assert_eq!(app.state().entries.len(), 2);
    assert!(app.state().entries[1].id.is_none());

    // Edit the seeded card
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Char('e')));
    assert!(matches!(app.state().mode, InteractionMode::CardEdit(_)));
    app.handle_key(key(KeyCode::Tab)); // focus description
    type_text(&mut app, " (updated)");
    app.handle_key(key(KeyCode::Enter));
    app.process_pending(&store, &session_path).await;

    // The patch landed remotely; the local entry still shows the old value
    assert_eq!(
        store.documents()[0].fields.get(Field::Description),
        Some("fast grep (updated)")
    );
    assert_eq!(
        app.state().entries[0].fields.get(Field::Description),
        Some("fast grep")
    );

    Ok(())
}

/// Integration test: create failures stay invisible beyond the flag
#[tokio::test]
async fn test_create_failure_is_silent() {
    let store = MemoryStore::new();
    store.fail_next_create();
    let session_dir = TempDir::new().unwrap();
    let session_path = session_dir.path().join("session.json");

    let mut app = App::new(AuthState::SignedOut);
    app.handle_key(key(KeyCode::Char('n')));
    type_text(&mut app, "doomed");
    app.handle_key(key(KeyCode::Enter));
    app.process_pending(&store, &session_path).await;

    assert!(app.state().form_error);
    assert!(app.state().entries.is_empty());
    assert!(app.state().notifier.is_empty());
    assert_eq!(app.state().form.input(Field::Title).content(), "doomed");
}

/// Integration test: session file round-trip drives the auth gate
#[test]
fn test_session_roundtrip_drives_auth_gate() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    assert!(!AuthState::load(&path)?.is_signed_in());

    Session::new("dev@example.com", "tok-123").save(&path)?;
    let state = AuthState::load(&path)?;
    assert!(state.is_signed_in());
    assert_eq!(state.token(), Some("tok-123"));

    Session::clear(&path)?;
    assert!(!AuthState::load(&path)?.is_signed_in());

    Ok(())
}

/// Integration test: document serialization round-trip
#[test]
fn test_document_serialization_roundtrip() -> Result<()> {
    let doc = Document {
        id: "abc123".to_string(),
        fields: fields("T", "D", "U"),
    };
    let json = serde_json::to_string(&doc)?;
    let restored: Document = serde_json::from_str(&json)?;
    assert_eq!(doc, restored);
    Ok(())
}

/// Integration test: store patch merges only the provided fields
#[tokio::test]
async fn test_store_patch_is_partial() -> Result<()> {
    let store = MemoryStore::new();
    let id = store.create(&fields("T", "D", "U")).await?;

    let mut changes = ToolFields::new();
    changes.set(Field::Url, "https://example.com/new");
    store.patch(&id, &changes).await?;

    let doc = &store.documents()[0];
    assert_eq!(doc.fields.get(Field::Title), Some("T"));
    assert_eq!(doc.fields.get(Field::Description), Some("D"));
    assert_eq!(doc.fields.get(Field::Url), Some("https://example.com/new"));
    Ok(())
}

/// Integration test: entries built from fetched documents keep ids
#[test]
fn test_entry_construction() {
    let fetched = ToolEntry::fetched("abc123", fields("T", "D", "U"));
    assert_eq!(fetched.id.as_deref(), Some("abc123"));

    let submitted = ToolEntry::submitted(fields("T", "D", "U"));
    assert!(submitted.id.is_none());
}
