//! Form session glue: validate, submit, normalize on failure.
//!
//! A [`FormSession`] owns the draft being edited and the violations from the
//! last validation pass. Submitting takes `&mut self`, so a form can have at
//! most one submission in flight.
//!
//! # Example
//!
//! ```ignore
//! let mut form = FormSession::new(AttendeeDraft::for_event(3));
//! form.edit("name", |d| d.name = "Ada".into());
//! form.edit("email", |d| d.email = "ada@example.org".into());
//!
//! match form.submit(&client, &SystemClock).await {
//!     SubmitOutcome::Accepted(attendee) => println!("registered #{}", attendee.id),
//!     SubmitOutcome::Rejected(violations) => show(violations),
//!     SubmitOutcome::Failed(failure) => toast(failure.message),
//! }
//! ```

use async_trait::async_trait;
use log::debug;

use crate::EventApi;
use crate::clock::Clock;
use crate::error::ApiError;
use crate::error::Failure;
use crate::model::Attendee;
use crate::model::AttendeeDraft;
use crate::model::Event;
use crate::model::EventDraft;
use crate::normalize::NormalizedFailure;
use crate::normalize::normalize;
use crate::validation::Validate;
use crate::validation::Violations;

/// A draft that knows which API call submits it.
#[async_trait]
pub trait Submit: Validate + Clone + Send + Sync {
    /// What the API returns on success.
    type Output: Send;

    /// Sends the draft. Only called once validation passed.
    async fn submit_to(&self, api: &dyn EventApi) -> Result<Self::Output, ApiError>;
}

#[async_trait]
impl Submit for EventDraft {
    type Output = Event;

    async fn submit_to(&self, api: &dyn EventApi) -> Result<Event, ApiError> {
        api.create_event(self).await
    }
}

#[async_trait]
impl Submit for AttendeeDraft {
    type Output = Attendee;

    /// Validation rejects a draft without an event id, so the error branch
    /// only fires when this is called directly.
    async fn submit_to(&self, api: &dyn EventApi) -> Result<Attendee, ApiError> {
        let Some(event_id) = self.event_id else {
            return Err(ApiError::InvalidRequest(
                "attendee draft has no event id".to_string(),
            ));
        };
        api.register_attendee(event_id, self).await
    }
}

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// The API accepted the draft.
    Accepted(T),
    /// Validation failed; the API was not called.
    Rejected(Violations),
    /// The API call failed.
    Failed(NormalizedFailure),
}

impl<T> SubmitOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Editing state for one form.
#[derive(Debug, Clone)]
pub struct FormSession<D> {
    initial: D,
    draft: D,
    violations: Violations,
}

impl<D: Submit> FormSession<D> {
    /// Starts a session. `reset` returns to this draft.
    pub fn new(initial: D) -> Self {
        Self {
            draft: initial.clone(),
            initial,
            violations: Violations::new(),
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Violations from the last validation pass, minus edited fields.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// First message for a field, if any.
    pub fn field_error(&self, field: &str) -> Option<&'static str> {
        self.violations.for_field(field)
    }

    /// Applies an edit and clears the edited field's violations.
    pub fn edit<F: FnOnce(&mut D)>(&mut self, field: &str, f: F) {
        f(&mut self.draft);
        self.violations.clear_field(field);
    }

    /// Re-runs validation and stores the result.
    pub fn validate(&mut self, clock: &dyn Clock) -> &Violations {
        self.violations = self.draft.validate_with(clock);
        &self.violations
    }

    /// Discards the draft and any violations.
    pub fn reset(&mut self) {
        self.draft = self.initial.clone();
        self.violations.clear();
    }

    /// Validates, then submits if the draft is clean.
    ///
    /// The draft is reset on success and kept on failure so the user can
    /// fix it and try again.
    pub async fn submit(&mut self, api: &dyn EventApi, clock: &dyn Clock) -> SubmitOutcome<D::Output> {
        if !self.validate(clock).is_empty() {
            debug!("Submission blocked by {} violation(s)", self.violations.len());
            return SubmitOutcome::Rejected(self.violations.clone());
        }

        let result = self.draft.submit_to(api).await;
        match result {
            Ok(output) => {
                self.reset();
                SubmitOutcome::Accepted(output)
            }
            Err(e) => SubmitOutcome::Failed(normalize(&Failure::from(e))),
        }
    }
}
