//! Static message catalog for field violations.
//!
//! Every message a validator can emit is listed here, keyed by field and
//! rule. Validators refer to these entries directly so the rule set and its
//! wording live in one table.

use serde::Serialize;

/// A validated attribute of an event or attendee draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    EventName,
    StartTime,
    EndTime,
    Location,
    MaxCapacity,
    AttendeeName,
    Email,
    EventId,
}

impl Field {
    /// Attribute name as it appears on the draft and on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::EventName | Self::AttendeeName => "name",
            Self::StartTime => "start_time",
            Self::EndTime => "end_time",
            Self::Location => "location",
            Self::MaxCapacity => "max_capacity",
            Self::Email => "email",
            Self::EventId => "event_id",
        }
    }
}

/// The condition a value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Missing or blank.
    Required,
    /// Longer than the field allows.
    TooLong,
    /// Not in a recognizable format.
    Malformed,
    /// A date-time that is not strictly after now.
    NotFuture,
    /// Missing, zero or negative number.
    NotPositive,
    /// Number above the field's maximum.
    TooLarge,
}

/// One catalog entry.
#[derive(Debug, PartialEq, Eq)]
pub struct RuleMessage {
    pub field: Field,
    pub rule: Rule,
    pub message: &'static str,
}

macro_rules! catalog {
    ($($ident:ident => ($field:ident, $rule:ident, $message:literal),)*) => {
        $(
            pub static $ident: RuleMessage = RuleMessage {
                field: Field::$field,
                rule: Rule::$rule,
                message: $message,
            };
        )*

        /// All entries, in field declaration order.
        pub static CATALOG: &[&RuleMessage] = &[$(&$ident),*];
    };
}

catalog! {
    EVENT_NAME_REQUIRED => (EventName, Required, "Event name is required"),
    EVENT_NAME_TOO_LONG => (EventName, TooLong, "Event name must be less than 200 characters"),
    START_TIME_REQUIRED => (StartTime, Required, "Event date is required"),
    START_TIME_MALFORMED => (StartTime, Malformed, "Invalid start date format"),
    START_TIME_NOT_FUTURE => (StartTime, NotFuture, "Event start must be in the future"),
    END_TIME_REQUIRED => (EndTime, Required, "End date is required"),
    END_TIME_MALFORMED => (EndTime, Malformed, "Invalid event date format"),
    END_TIME_NOT_FUTURE => (EndTime, NotFuture, "Event date must be in the future"),
    LOCATION_REQUIRED => (Location, Required, "Event location is required"),
    LOCATION_TOO_LONG => (Location, TooLong, "Location must be less than 300 characters"),
    MAX_CAPACITY_NOT_POSITIVE => (MaxCapacity, NotPositive, "Maximum attendees must be a positive number"),
    MAX_CAPACITY_TOO_LARGE => (MaxCapacity, TooLarge, "Maximum attendees cannot exceed 10,000"),
    ATTENDEE_NAME_REQUIRED => (AttendeeName, Required, "Attendee name is required"),
    ATTENDEE_NAME_TOO_LONG => (AttendeeName, TooLong, "Name must be less than 100 characters"),
    EMAIL_REQUIRED => (Email, Required, "Email address is required"),
    EMAIL_MALFORMED => (Email, Malformed, "Please enter a valid email address"),
    EVENT_ID_NOT_POSITIVE => (EventId, NotPositive, "Valid event ID is required"),
}

/// Finds the catalog entry for a field and rule.
pub fn lookup(field: Field, rule: Rule) -> Option<&'static RuleMessage> {
    CATALOG
        .iter()
        .copied()
        .find(|entry| entry.field == field && entry.rule == rule)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_keys_are_unique() {
        let keys: HashSet<_> = CATALOG.iter().map(|e| (e.field, e.rule)).collect();
        assert_eq!(keys.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 17);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            lookup(Field::MaxCapacity, Rule::TooLarge).map(|e| e.message),
            Some("Maximum attendees cannot exceed 10,000")
        );
        assert_eq!(lookup(Field::EventId, Rule::TooLong), None);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::EventName.name(), "name");
        assert_eq!(Field::AttendeeName.name(), "name");
        assert_eq!(Field::StartTime.name(), "start_time");
        assert_eq!(Field::EventId.name(), "event_id");
    }
}
