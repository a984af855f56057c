// src/integrations/portal/gateway.rs
//
// The typed surface of the remote portal. One operation per remote
// capability; controllers depend on this trait, never on the HTTP client
// directly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ApplicationDraft, ApplicationRecord};
use crate::error::AppResult;

/// Successful credential exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Remote portal operations.
///
/// Authenticated operations attach the current bearer token when one is
/// present, but never short-circuit locally when it is absent: the call
/// proceeds and the server answers with an authorization error. The server
/// is the single source of truth on auth.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortalGateway: Send + Sync {
    /// Exchange credentials for a bearer token. Unauthenticated.
    async fn login(&self, username: &str, password: &str) -> AppResult<TokenResponse>;

    /// Create a portal account. Unauthenticated.
    async fn register(&self, request: &RegisterRequest) -> AppResult<()>;

    /// All applications belonging to the current bearer identity. A
    /// malformed or non-list payload degrades to an empty list instead of
    /// failing.
    async fn list_applications(&self) -> AppResult<Vec<ApplicationRecord>>;

    async fn get_application(&self, id: i64) -> AppResult<ApplicationRecord>;

    async fn create_application(&self, draft: &ApplicationDraft) -> AppResult<ApplicationRecord>;

    async fn update_application(
        &self,
        id: i64,
        draft: &ApplicationDraft,
    ) -> AppResult<ApplicationRecord>;

    async fn delete_application(&self, id: i64) -> AppResult<()>;
}
