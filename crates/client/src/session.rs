//! Session boundary: supplies the bearer credential and hears about auth failures.
//!
//! The gateway only reads the token per request and reports 401s back through
//! [`SessionProvider::on_auth_failure`]. Storing, refreshing and clearing the
//! credential is the provider's business.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::error::Result;

const AUTH_FAILURE_CHANNEL_CAPACITY: usize = 16;

/// Source of the bearer credential attached to gateway requests.
pub trait SessionProvider: Send + Sync {
    /// Returns the current token, if any.
    fn token(&self) -> Option<String>;

    /// Called by the gateway when the server rejects the credential.
    fn on_auth_failure(&self);
}

/// In-memory session.
///
/// Clears itself on auth failure and notifies subscribers.
#[derive(Debug)]
pub struct MemorySession {
    token: RwLock<Option<String>>,
    auth_failures: broadcast::Sender<()>,
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySession {
    pub fn new() -> Self {
        let (auth_failures, _) = broadcast::channel(AUTH_FAILURE_CHANNEL_CAPACITY);
        Self {
            token: RwLock::new(None),
            auth_failures,
        }
    }

    /// Creates a session holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Subscribes to auth failure notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.auth_failures.subscribe()
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn on_auth_failure(&self) {
        self.clear();
        // No subscribers is fine.
        let _ = self.auth_failures.send(());
        tracing::info!("Session cleared after auth failure");
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Session persisted as a small JSON file so the CLI stays logged in between runs.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    memory: MemorySession,
}

impl FileSession {
    /// Loads the session stored at `path`. A missing file means logged out.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let memory = MemorySession::new();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let stored: StoredSession = serde_json::from_str(&contents)?;
                memory.set_token(stored.token);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        Ok(Self { path, memory })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stores `token` in memory and on disk.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredSession {
            token: token.to_string(),
        };
        std::fs::write(&self.path, serde_json::to_string(&stored)?)?;
        self.memory.set_token(token);
        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Forgets the token in memory and on disk.
    pub fn clear(&self) -> Result<()> {
        self.memory.clear();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionProvider for FileSession {
    fn token(&self) -> Option<String> {
        self.memory.token()
    }

    fn on_auth_failure(&self) {
        if let Err(e) = self.clear() {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to clear session file");
        }
        self.memory.on_auth_failure();
    }
}
