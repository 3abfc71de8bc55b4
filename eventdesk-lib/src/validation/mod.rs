//! Client-side validation for event and attendee drafts.
//!
//! Each field is checked independently and reports at most one violation:
//! the first rule that fires. Violations come back as data in field
//! declaration order; they are never raised as errors.
//!
//! # Example
//!
//! ```
//! use eventdesk_lib::model::AttendeeDraft;
//! use eventdesk_lib::validate_attendee;
//!
//! let draft = AttendeeDraft {
//!     name: "Ada".to_string(),
//!     email: "ada@example".to_string(),
//!     event_id: Some(3),
//! };
//!
//! let violations = validate_attendee(&draft);
//! assert_eq!(violations.for_field("email"), Some("Please enter a valid email address"));
//! ```

mod attendee;
pub mod catalog;
mod datetime;
mod event;
mod violation;

use chrono::DateTime;
use chrono::Utc;

pub use attendee::is_valid_email;
pub use attendee::validate_attendee;
pub use catalog::Field;
pub use catalog::Rule;
pub use datetime::parse_date_time;
pub use event::validate_event_at;
pub use violation::FieldViolation;
pub use violation::Violations;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::model::AttendeeDraft;
use crate::model::EventDraft;

/// Validates an event draft against the system clock.
pub fn validate_event(draft: &EventDraft) -> Violations {
    validate_event_at(draft, SystemClock.now())
}

/// A draft that can be checked before submission.
pub trait Validate {
    /// Runs every rule against `now`.
    fn validate_at(&self, now: DateTime<Utc>) -> Violations;

    /// Runs every rule against the given clock.
    fn validate_with(&self, clock: &dyn Clock) -> Violations {
        self.validate_at(clock.now())
    }
}

impl Validate for EventDraft {
    fn validate_at(&self, now: DateTime<Utc>) -> Violations {
        validate_event_at(self, now)
    }
}

impl Validate for AttendeeDraft {
    fn validate_at(&self, _now: DateTime<Utc>) -> Violations {
        validate_attendee(self)
    }
}

// Lengths are counted the way browser form limits count them.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}
