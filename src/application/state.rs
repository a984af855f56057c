// src/application/state.rs

use std::sync::Arc;

use crate::error::AppResult;
use crate::events::EventBus;
use crate::infrastructure::{FileTokenStore, TokenCell, TokenStore};
use crate::integrations::portal::{PortalClient, PortalConfig, PortalGateway};
use crate::services::{DashboardService, FormService, RouteGuard, SessionService};

/// Composition root for an embedding UI. Wires the shared token cell into
/// both the gateway and the session service, restores any persisted
/// session, and hands out per-screen services.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub portal: Arc<dyn PortalGateway>,
    pub session: Arc<SessionService>,
    pub route_guard: RouteGuard,
}

impl AppState {
    pub fn new(config: &PortalConfig) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());
        let cell = TokenCell::new();

        let portal: Arc<dyn PortalGateway> = Arc::new(PortalClient::new(config, cell.clone()));
        let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new()?);

        let session = Arc::new(SessionService::new(
            portal.clone(),
            tokens,
            cell,
            event_bus.clone(),
        ));
        session.initialize();

        let route_guard = RouteGuard::new(session.clone());

        Ok(Self {
            event_bus,
            portal,
            session,
            route_guard,
        })
    }

    /// A fresh dashboard screen.
    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(self.portal.clone(), self.event_bus.clone())
    }

    /// A fresh, blank application form.
    pub fn application_form(&self) -> FormService {
        FormService::new(self.portal.clone(), self.event_bus.clone())
    }
}
