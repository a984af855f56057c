// src/lib.rs
// LicenseHub - client-side core for a driver licence application portal
//
// Architecture:
// - Domain-centric: records, drafts, and validation live in domain
// - Event-driven: session transitions are pushed, never polled
// - Explicit: controllers own their screen's state exclusively
// - The UI (router, widgets) is an external collaborator

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;

// ============================================================================
// INTEGRATIONS & ORCHESTRATION
// ============================================================================

pub mod application;
pub mod integrations;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_draft,
    ApplicationDraft,
    ApplicationRecord,
    ApplicationStatus,
    DomainError,
    Field,
    FieldErrors,
    Session,
    Sex,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult, ErrorDetail, FieldViolation};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{ApplicationDeleted, ApplicationSaved, DomainEvent, EventBus, SessionChanged};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{FileTokenStore, MemoryTokenStore, TokenCell, TokenStore};

// ============================================================================
// PUBLIC API - Portal gateway
// ============================================================================

pub use integrations::{PortalClient, PortalConfig, PortalGateway, RegisterRequest, TokenResponse};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    evaluate,
    DashboardService,
    FormPhase,
    FormService,
    Route,
    RouteDecision,
    RouteGuard,
    SessionService,
    SubmitIntent,
    SubmitOutcome,
};

// ============================================================================
// PUBLIC API - Application layer
// ============================================================================

pub use application::AppState;
