// src/services/mod.rs
//
// Orchestration layer: one service per screen concern.

pub mod dashboard_service;
pub mod form_service;
pub mod route_guard;
pub mod session_service;

pub use dashboard_service::DashboardService;

pub use form_service::{FormPhase, FormService, SubmitIntent, SubmitOutcome};

pub use route_guard::{evaluate, Route, RouteDecision, RouteGuard};

pub use session_service::SessionService;
