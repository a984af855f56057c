// src/services/session_service.rs

use std::sync::Arc;

use crate::domain::Session;
use crate::error::AppResult;
use crate::events::{EventBus, SessionChanged};
use crate::infrastructure::{TokenCell, TokenStore};
use crate::integrations::portal::{PortalGateway, RegisterRequest};

/// Owns the session lifecycle: boot-time restore, credential exchange,
/// and teardown. Every transition is pushed onto the event bus so the
/// route guard and authentication-dependent UI never have to poll.
pub struct SessionService {
    portal: Arc<dyn PortalGateway>,
    tokens: Arc<dyn TokenStore>,
    cell: TokenCell,
    event_bus: Arc<EventBus>,
}

impl SessionService {
    pub fn new(
        portal: Arc<dyn PortalGateway>,
        tokens: Arc<dyn TokenStore>,
        cell: TokenCell,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            portal,
            tokens,
            cell,
            event_bus,
        }
    }

    /// Restore any persisted token at process start. No network call; an
    /// expired token is discovered when the first authenticated request
    /// fails.
    pub fn initialize(&self) -> Session {
        match self.tokens.load() {
            Ok(token) => self.cell.set(token),
            Err(e) => {
                log::warn!("could not read persisted session: {}", e);
                self.cell.set(None);
            }
        }
        let session = self.session();
        self.event_bus
            .emit(SessionChanged::new(session.authenticated()));
        session
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        Session::new(self.cell.get())
    }

    /// Exchange credentials for a token. On failure the session is left
    /// unchanged and the error carries the server's detail message.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let response = self.portal.login(username, password).await?;

        if let Err(e) = self.tokens.save(&response.access_token) {
            // The session still works for this process lifetime.
            log::warn!("could not persist session token: {}", e);
        }
        self.cell.set(Some(response.access_token));
        self.event_bus.emit(SessionChanged::new(true));

        Ok(self.session())
    }

    /// Clear the session. Always succeeds; a failure to remove the
    /// persisted token is logged and the in-memory state clears anyway.
    pub fn logout(&self) {
        if let Err(e) = self.tokens.clear() {
            log::warn!("could not remove persisted session token: {}", e);
        }
        self.cell.set(None);
        self.event_bus.emit(SessionChanged::new(false));
    }

    /// Account creation pass-through. Field errors surface through the
    /// same structured detail payload as application validation.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<()> {
        self.portal.register(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ErrorDetail};
    use crate::infrastructure::MemoryTokenStore;
    use crate::integrations::portal::{MockPortalGateway, TokenResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service_with(
        portal: MockPortalGateway,
        tokens: Arc<MemoryTokenStore>,
    ) -> (SessionService, Arc<EventBus>) {
        let event_bus = Arc::new(EventBus::new());
        let service = SessionService::new(
            Arc::new(portal),
            tokens,
            TokenCell::new(),
            event_bus.clone(),
        );
        (service, event_bus)
    }

    #[tokio::test]
    async fn test_login_success_persists_token_and_authenticates() {
        let mut portal = MockPortalGateway::new();
        portal
            .expect_login()
            .withf(|user, pass| user == "ana" && pass == "hunter2")
            .returning(|_, _| {
                Ok(TokenResponse {
                    access_token: "jwt-token".to_string(),
                })
            });

        let tokens = Arc::new(MemoryTokenStore::new());
        let (service, _) = service_with(portal, tokens.clone());

        let session = service.login("ana", "hunter2").await.unwrap();
        assert!(session.authenticated());
        assert_eq!(session.token(), Some("jwt-token"));
        assert_eq!(tokens.load().unwrap(), Some("jwt-token".to_string()));
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_unchanged() {
        let mut portal = MockPortalGateway::new();
        portal.expect_login().returning(|_, _| {
            Err(AppError::Api {
                status: 401,
                detail: Some(ErrorDetail::Message(
                    "Invalid username or password.".to_string(),
                )),
            })
        });

        let tokens = Arc::new(MemoryTokenStore::new());
        let (service, _) = service_with(portal, tokens.clone());

        let err = service.login("ana", "wrong").await.unwrap_err();
        assert_eq!(err.detail_message(), Some("Invalid username or password."));
        assert!(!service.session().authenticated());
        assert_eq!(tokens.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_initialize_restores_persisted_token_without_network() {
        // No expectations on the mock: any call would panic the test.
        let portal = MockPortalGateway::new();
        let tokens = Arc::new(MemoryTokenStore::with_token("persisted-jwt"));
        let (service, _) = service_with(portal, tokens);

        let session = service.initialize();
        assert!(session.authenticated());
        assert_eq!(session.token(), Some("persisted-jwt"));
    }

    #[tokio::test]
    async fn test_logout_clears_both_memory_and_store() {
        let portal = MockPortalGateway::new();
        let tokens = Arc::new(MemoryTokenStore::with_token("jwt"));
        let (service, _) = service_with(portal, tokens.clone());

        service.initialize();
        service.logout();

        assert!(!service.session().authenticated());
        assert_eq!(tokens.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_transitions_are_pushed_to_subscribers() {
        let mut portal = MockPortalGateway::new();
        portal.expect_login().returning(|_, _| {
            Ok(TokenResponse {
                access_token: "jwt".to_string(),
            })
        });

        let tokens = Arc::new(MemoryTokenStore::new());
        let (service, event_bus) = service_with(portal, tokens);

        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        event_bus.subscribe::<SessionChanged, _>(move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        service.initialize();
        service.login("ana", "hunter2").await.unwrap();
        service.logout();

        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }
}
