// src/services/form_service.rs
//
// Lifecycle of a single application form: Editing -> Submitting ->
// Editing (failure, errors populated) | Completed (success). The screen
// owning this service is the only writer of its draft and error map.

use std::sync::Arc;

use crate::domain::{
    validate_draft, ApplicationDraft, ApplicationRecord, ApplicationStatus, DomainError, Field,
    FieldErrors,
};
use crate::error::{AppError, AppResult, ErrorDetail};
use crate::events::{ApplicationSaved, EventBus};
use crate::integrations::portal::PortalGateway;

/// What the user asked the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitIntent {
    /// Persist with status `in_progress`; the record stays editable.
    SaveDraft,
    /// Persist with status forced to `submitted`; terminal for the record.
    SubmitForReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// Local validation in progress; synchronous, so only ever observed
    /// from inside the submission path itself.
    Validating,
    Submitting,
    Completed,
}

/// Result of a submission attempt that did not itself error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted; the collaborating router should navigate away.
    Completed,
    /// Local or server validation failed; `errors()` holds the details.
    Rejected,
}

pub struct FormService {
    portal: Arc<dyn PortalGateway>,
    event_bus: Arc<EventBus>,
    draft: ApplicationDraft,
    /// Draft as loaded, for `discard`.
    baseline: ApplicationDraft,
    record_id: Option<i64>,
    /// Set when the loaded record is already submitted; every mutating
    /// operation is rejected before it can reach the network.
    locked: bool,
    phase: FormPhase,
    errors: FieldErrors,
    epoch: u64,
}

impl FormService {
    /// Blank create form.
    pub fn new(portal: Arc<dyn PortalGateway>, event_bus: Arc<EventBus>) -> Self {
        Self {
            portal,
            event_bus,
            draft: ApplicationDraft::default(),
            baseline: ApplicationDraft::default(),
            record_id: None,
            locked: false,
            phase: FormPhase::Editing,
            errors: FieldErrors::new(),
            epoch: 0,
        }
    }

    /// Edit form pre-populated from an already fetched record.
    pub fn from_record(
        portal: Arc<dyn PortalGateway>,
        event_bus: Arc<EventBus>,
        record: &ApplicationRecord,
    ) -> Self {
        let mut service = Self::new(portal, event_bus);
        service.adopt_record(record, record.id);
        service
    }

    /// Fetch a record into the form. A not-found or transport failure is
    /// terminal for the screen and propagates untouched.
    pub async fn load(&mut self, id: i64) -> AppResult<()> {
        let epoch = self.epoch;
        let record = self.portal.get_application(id).await?;
        if epoch != self.epoch {
            // The user navigated away while the fetch was in flight.
            return Ok(());
        }
        self.adopt_record(&record, record.id.or(Some(id)));
        Ok(())
    }

    fn adopt_record(&mut self, record: &ApplicationRecord, id: Option<i64>) {
        self.record_id = id;
        self.locked = record.status == ApplicationStatus::Submitted;
        self.draft = ApplicationDraft::from_record(record);
        self.baseline = self.draft.clone();
        self.errors.clear();
        self.phase = FormPhase::Editing;
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Record one keystroke's worth of change. Rejected when the record
    /// was loaded in submitted state.
    pub fn set_field(&mut self, field: Field, value: &str) -> AppResult<()> {
        if self.locked {
            return Err(DomainError::SubmittedImmutable.into());
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// Validate locally, then persist through the gateway.
    ///
    /// The error map is cleared at the start of every attempt. Local
    /// validation failures never reach the network. Gateway failures are
    /// converted into field-level or general-level messages here; the only
    /// error this method itself returns is the submitted-record rejection.
    pub async fn submit(&mut self, intent: SubmitIntent) -> AppResult<SubmitOutcome> {
        if self.locked {
            return Err(DomainError::SubmittedImmutable.into());
        }

        self.phase = FormPhase::Validating;
        self.errors.clear();
        let local = validate_draft(&self.draft);
        if !local.is_empty() {
            self.errors = local;
            self.phase = FormPhase::Editing;
            return Ok(SubmitOutcome::Rejected);
        }

        self.draft.status = match intent {
            SubmitIntent::SaveDraft => ApplicationStatus::InProgress,
            SubmitIntent::SubmitForReview => ApplicationStatus::Submitted,
        };

        self.phase = FormPhase::Submitting;
        let epoch = self.epoch;
        let result = match self.record_id {
            None => self.portal.create_application(&self.draft).await,
            Some(id) => self.portal.update_application(id, &self.draft).await,
        };

        if epoch != self.epoch {
            // Screen was discarded mid-flight; drop the response.
            return Ok(SubmitOutcome::Rejected);
        }

        match result {
            Ok(record) => {
                self.record_id = record.id.or(self.record_id);
                self.errors.clear();
                self.phase = FormPhase::Completed;
                self.event_bus
                    .emit(ApplicationSaved::new(self.record_id, record.status));
                Ok(SubmitOutcome::Completed)
            }
            Err(err) => {
                self.phase = FormPhase::Editing;
                self.apply_failure(err);
                Ok(SubmitOutcome::Rejected)
            }
        }
    }

    /// Abandon in-memory edits. No network effect; always succeeds. Any
    /// response still in flight is dropped.
    pub fn discard(&mut self) {
        self.epoch += 1;
        self.draft = self.baseline.clone();
        self.errors.clear();
        self.phase = FormPhase::Completed;
    }

    fn apply_failure(&mut self, err: AppError) {
        match err {
            AppError::Api {
                detail: Some(ErrorDetail::Fields(violations)),
                ..
            } => self.errors.apply_violations(&violations),
            AppError::Api {
                detail: Some(ErrorDetail::Message(msg)),
                ..
            } => self.errors.set_general(msg),
            AppError::NotFound => self.errors.set_general("Application not found."),
            other => {
                log::warn!("application save failed: {}", other);
                self.errors
                    .set_general("Failed to save application. Please try again.");
            }
        }
    }
}
