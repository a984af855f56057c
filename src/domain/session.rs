// src/domain/session.rs

use serde::{Deserialize, Serialize};

/// Snapshot of the authentication state.
///
/// The authenticated flag is derived from token presence, so the two can
/// never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Session with no credential, as at first boot.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn authenticated(&self) -> bool {
        self.token.is_some()
    }
}
