// src/domain/application/mod.rs

pub mod entity;
pub mod invariants;

pub use entity::{ApplicationDraft, ApplicationRecord, ApplicationStatus, Sex};
pub use invariants::validate_draft;
