//! Attendee records and drafts.

use serde::Deserialize;
use serde::Serialize;

/// An attendee as returned by the attendee endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Only present on registration responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
}

/// An attendee nested inside an [`Event`](super::Event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// User-entered fields for registering an attendee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeDraft {
    pub name: String,
    pub email: String,
    pub event_id: Option<i64>,
}

impl AttendeeDraft {
    /// Creates an empty draft bound to an event.
    pub fn for_event(event_id: i64) -> Self {
        Self {
            event_id: Some(event_id),
            ..Default::default()
        }
    }
}
