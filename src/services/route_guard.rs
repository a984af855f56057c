// src/services/route_guard.rs

use std::sync::Arc;

use crate::domain::Session;
use crate::services::SessionService;

/// Screens the external router can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    CreateApplication,
    EditApplication(i64),
}

impl Route {
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::CreateApplication | Route::EditApplication(_)
        )
    }

    /// URL path for the router collaborator.
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::CreateApplication => "/applications/create".to_string(),
            Route::EditApplication(id) => format!("/applications/edit/{}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
}

/// Pure function of the session: protected destinations require an
/// authenticated session, everything else passes through.
pub fn evaluate(session: &Session, route: &Route) -> RouteDecision {
    if route.is_protected() && !session.authenticated() {
        RouteDecision::RedirectToLogin
    } else {
        RouteDecision::Allow
    }
}

/// Guard consulted by the router on every navigation attempt. Reads the
/// live session each time; nothing is cached.
pub struct RouteGuard {
    session: Arc<SessionService>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionService>) -> Self {
        Self { session }
    }

    pub fn check(&self, route: &Route) -> RouteDecision {
        evaluate(&self.session.session(), route)
    }
}
