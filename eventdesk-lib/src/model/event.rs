//! Event records and drafts.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::AttendeeSummary;
use crate::validation::parse_date_time;

/// An event as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub max_capacity: i64,
    #[serde(default)]
    pub attendees: Vec<AttendeeSummary>,
}

impl Event {
    /// Parses the start time, if the server sent a recognizable value.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_date_time(&self.start_time)
    }

    /// Parses the end time, if the server sent a recognizable value.
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        parse_date_time(&self.end_time)
    }

    /// Number of seats not yet taken.
    pub fn remaining_capacity(&self) -> i64 {
        let booked = i64::try_from(self.attendees.len()).unwrap_or(i64::MAX);
        self.max_capacity.saturating_sub(booked).max(0)
    }
}

/// User-entered fields for a new event.
///
/// Date-times are kept as the raw text the user typed; parsing happens
/// during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub max_capacity: Option<i64>,
}
