// src/domain/mod.rs
//
// Domain root: entities, invariants, and the errors they can raise.
// All other modules import from `crate::domain::*`.

pub mod application;
pub mod field_errors;
pub mod session;

pub use application::{
    validate_draft, ApplicationDraft, ApplicationRecord, ApplicationStatus, Sex,
};
pub use field_errors::{Field, FieldErrors};
pub use session::Session;

use thiserror::Error;

/// Violations of client-side business rules.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Submitted applications are terminal; no field change or resubmission
    /// is allowed, and none of them may reach the network.
    #[error("Submitted applications can no longer be edited")]
    SubmittedImmutable,
}
