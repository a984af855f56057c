// src/infrastructure/token_cell.rs

use std::sync::{Arc, RwLock};

/// Shared in-memory slot for the bearer token.
///
/// Written only by login/logout; read by every outbound request. Cloning
/// shares the slot, so the gateway and the session service observe the
/// same value.
#[derive(Clone, Default)]
pub struct TokenCell {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.inner.read().unwrap().clone()
    }

    pub fn set(&self, token: Option<String>) {
        *self.inner.write().unwrap() = token;
    }

    pub fn is_present(&self) -> bool {
        self.inner.read().unwrap().is_some()
    }
}
