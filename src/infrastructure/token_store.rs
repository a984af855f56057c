// src/infrastructure/token_store.rs
//
// Durable token persistence. One value, stored under a fixed well-known
// key, with a lifecycle tied to login/logout only.

use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::json;

use crate::error::AppResult;

/// Well-known key the token is stored under.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore: Send + Sync {
    fn load(&self) -> AppResult<Option<String>>;
    fn save(&self, token: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// Token persisted as a small JSON object in the user's config directory,
/// surviving process restarts.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store under the platform config directory
    /// (e.g. `~/.config/licensehub/session.json`).
    pub fn new() -> AppResult<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory available")
        })?;
        Ok(Self {
            path: base.join("licensehub").join("session.json"),
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> AppResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => Ok(value
                .get(TOKEN_KEY)
                .and_then(|t| t.as_str())
                .map(str::to_string)),
            Err(e) => {
                // A corrupt session file must not prevent boot.
                log::warn!("ignoring unreadable session file {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    fn save(&self, token: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string(&json!({ TOKEN_KEY: token }))?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and embedders that manage persistence
/// themselves.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.token.read().unwrap().clone())
    }

    fn save(&self, token: &str) -> AppResult<()> {
        *self.token.write().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.token.write().unwrap() = None;
        Ok(())
    }
}
