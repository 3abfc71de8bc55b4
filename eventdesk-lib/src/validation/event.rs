use chrono::DateTime;
use chrono::Utc;

use super::Violations;
use super::catalog::*;
use super::datetime::parse_date_time;
use super::utf16_len;
use crate::model::EventDraft;

const NAME_MAX: usize = 200;
const LOCATION_MAX: usize = 300;
const CAPACITY_MAX: i64 = 10_000;

/// Validates an event draft against `now`.
///
/// Start and end are each checked against `now` only; an end before the
/// start is accepted.
pub fn validate_event_at(draft: &EventDraft, now: DateTime<Utc>) -> Violations {
    let mut violations = Violations::new();

    if draft.name.trim().is_empty() {
        violations.push(&EVENT_NAME_REQUIRED);
    } else if utf16_len(&draft.name) > NAME_MAX {
        violations.push(&EVENT_NAME_TOO_LONG);
    }

    check_future(
        &mut violations,
        &draft.start_time,
        now,
        [&START_TIME_REQUIRED, &START_TIME_MALFORMED, &START_TIME_NOT_FUTURE],
    );
    check_future(
        &mut violations,
        &draft.end_time,
        now,
        [&END_TIME_REQUIRED, &END_TIME_MALFORMED, &END_TIME_NOT_FUTURE],
    );

    if draft.location.trim().is_empty() {
        violations.push(&LOCATION_REQUIRED);
    } else if utf16_len(&draft.location) > LOCATION_MAX {
        violations.push(&LOCATION_TOO_LONG);
    }

    match draft.max_capacity {
        None => violations.push(&MAX_CAPACITY_NOT_POSITIVE),
        Some(n) if n <= 0 => violations.push(&MAX_CAPACITY_NOT_POSITIVE),
        Some(n) if n > CAPACITY_MAX => violations.push(&MAX_CAPACITY_TOO_LARGE),
        Some(_) => {}
    }

    violations
}

// Only an empty string counts as missing; blank text falls through to the
// format check.
fn check_future(
    violations: &mut Violations,
    raw: &str,
    now: DateTime<Utc>,
    [required, malformed, not_future]: [&'static RuleMessage; 3],
) {
    if raw.is_empty() {
        violations.push(required);
        return;
    }
    match parse_date_time(raw) {
        None => violations.push(malformed),
        Some(at) if at <= now => violations.push(not_future),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2030-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn valid() -> EventDraft {
        EventDraft {
            name: "RustConf".to_string(),
            start_time: "2030-06-01T09:00:00Z".to_string(),
            end_time: "2030-06-01T17:00:00Z".to_string(),
            location: "Hall A".to_string(),
            max_capacity: Some(250),
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_event_at(&valid(), now()).is_empty());
    }

    #[test]
    fn test_start_equal_to_now_is_rejected() {
        let draft = EventDraft {
            start_time: "2030-01-01T00:00:00Z".to_string(),
            ..valid()
        };
        let violations = validate_event_at(&draft, now());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.for_field("start_time"),
            Some("Event start must be in the future")
        );
    }

    #[test]
    fn test_blank_date_is_malformed_not_missing() {
        let draft = EventDraft {
            end_time: "  ".to_string(),
            ..valid()
        };
        let violations = validate_event_at(&draft, now());
        assert!(violations.contains(Field::EndTime, Rule::Malformed));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let draft = EventDraft {
            start_time: "2030-06-02T09:00:00Z".to_string(),
            end_time: "2030-06-01T09:00:00Z".to_string(),
            ..valid()
        };
        assert!(validate_event_at(&draft, now()).is_empty());
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let draft = EventDraft {
            name: "n".repeat(200),
            location: "l".repeat(300),
            ..valid()
        };
        assert!(validate_event_at(&draft, now()).is_empty());

        let draft = EventDraft {
            name: "n".repeat(201),
            location: "l".repeat(301),
            ..valid()
        };
        let violations = validate_event_at(&draft, now());
        assert!(violations.contains(Field::EventName, Rule::TooLong));
        assert!(violations.contains(Field::Location, Rule::TooLong));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Each emoji is two UTF-16 code units.
        let draft = EventDraft {
            name: "🎉".repeat(101),
            ..valid()
        };
        let violations = validate_event_at(&draft, now());
        assert!(violations.contains(Field::EventName, Rule::TooLong));
    }
}
