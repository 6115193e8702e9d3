//! Persisted session state.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TroveError};

/// A signed-in session issued by the external auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Account name, for display only.
    pub account: String,
    /// Bearer token attached to store requests.
    pub token: String,
    /// When the session file was written.
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    /// Create a session signed in now.
    pub fn new(account: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
            signed_in_at: Utc::now(),
        }
    }

    /// Load the session file if one exists.
    pub fn load(path: &Path) -> Result<Option<Session>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let session = serde_json::from_str(&content)
            .map_err(|e| TroveError::Auth(format!("unreadable session file: {}", e)))?;
        Ok(Some(session))
    }

    /// Persist the session, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Remove the session file. Missing files are fine.
    pub fn clear(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The sign-in state the UI reads to pick its affordance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// A session file is present.
    SignedIn(Session),
    /// No session file.
    #[default]
    SignedOut,
}

impl AuthState {
    /// Read the sign-in state from the session file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(match Session::load(path)? {
            Some(session) => Self::SignedIn(session),
            None => Self::SignedOut,
        })
    }

    /// Whether a session is active.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    /// The session token, when signed in.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::SignedIn(session) => Some(&session.token),
            Self::SignedOut => None,
        }
    }

    /// The account name, when signed in.
    pub fn account(&self) -> Option<&str> {
        match self {
            Self::SignedIn(session) => Some(&session.account),
            Self::SignedOut => None,
        }
    }
}
