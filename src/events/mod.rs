// src/events/mod.rs

pub mod bus;
pub mod types;

pub use bus::EventBus;
pub use types::{ApplicationDeleted, ApplicationSaved, DomainEvent, SessionChanged};
