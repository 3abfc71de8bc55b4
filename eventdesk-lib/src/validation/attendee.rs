use std::sync::LazyLock;

use regex::Regex;

use super::Violations;
use super::catalog::*;
use super::utf16_len;
use crate::model::AttendeeDraft;

const NAME_MAX: usize = 100;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Checks the `local@domain.tld` shape: no whitespace or `@` in either
/// part, and a dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validates an attendee draft.
pub fn validate_attendee(draft: &AttendeeDraft) -> Violations {
    let mut violations = Violations::new();

    if draft.name.trim().is_empty() {
        violations.push(&ATTENDEE_NAME_REQUIRED);
    } else if utf16_len(&draft.name) > NAME_MAX {
        violations.push(&ATTENDEE_NAME_TOO_LONG);
    }

    if draft.email.trim().is_empty() {
        violations.push(&EMAIL_REQUIRED);
    } else if !is_valid_email(&draft.email) {
        violations.push(&EMAIL_MALFORMED);
    }

    if !draft.event_id.is_some_and(|id| id > 0) {
        violations.push(&EVENT_ID_NOT_POSITIVE);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("ada.lovelace+talks@mail.example.org"));
        assert!(!is_valid_email("ada.example.org"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada @example.org"));
        assert!(!is_valid_email("ada@@example.org"));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_padded_email_is_malformed() {
        let draft = AttendeeDraft {
            name: "Ada".to_string(),
            email: " ada@example.org".to_string(),
            event_id: Some(1),
        };
        let violations = validate_attendee(&draft);
        assert_eq!(violations.len(), 1);
        assert!(violations.contains(Field::Email, Rule::Malformed));
    }

    #[test]
    fn test_event_id_must_be_positive() {
        for event_id in [None, Some(0), Some(-4)] {
            let draft = AttendeeDraft {
                name: "Ada".to_string(),
                email: "ada@example.org".to_string(),
                event_id,
            };
            let violations = validate_attendee(&draft);
            assert_eq!(
                violations.for_field("event_id"),
                Some("Valid event ID is required")
            );
        }
    }
}
