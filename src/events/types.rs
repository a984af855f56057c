// src/events/types.rs
//
// Events are immutable facts that have already occurred. They carry only
// the data an observer needs to react; no business logic lives here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ApplicationStatus;

/// Trait every event must implement.
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance.
    fn event_id(&self) -> Uuid;

    /// When this event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name.
    fn event_type(&self) -> &'static str;
}

/// Emitted on every session transition: boot, successful login, logout.
/// The route guard and authentication-dependent UI react to this instead
/// of polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub authenticated: bool,
}

impl SessionChanged {
    pub fn new(authenticated: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            authenticated,
        }
    }
}

impl DomainEvent for SessionChanged {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SessionChanged"
    }
}

/// Emitted after the portal confirms a create or update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSaved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub application_id: Option<i64>,
    pub status: ApplicationStatus,
}

impl ApplicationSaved {
    pub fn new(application_id: Option<i64>, status: ApplicationStatus) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            application_id,
            status,
        }
    }
}

impl DomainEvent for ApplicationSaved {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "ApplicationSaved"
    }
}

/// Emitted after the portal confirms a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub application_id: i64,
}

impl ApplicationDeleted {
    pub fn new(application_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            application_id,
        }
    }
}

impl DomainEvent for ApplicationDeleted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "ApplicationDeleted"
    }
}
