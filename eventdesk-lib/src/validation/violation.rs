use serde::Serialize;

use super::catalog::Field;
use super::catalog::Rule;
use super::catalog::RuleMessage;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Attribute name (`name`, `start_time`, ...).
    pub field: &'static str,
    /// Which rule fired.
    pub rule: Rule,
    /// Message shown next to the field.
    pub message: &'static str,
}

impl From<&'static RuleMessage> for FieldViolation {
    fn from(entry: &'static RuleMessage) -> Self {
        Self {
            field: entry.field.name(),
            rule: entry.rule,
            message: entry.message,
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered violations produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: &'static RuleMessage) {
        self.0.push(entry.into());
    }

    /// Check if no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldViolation> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Get the first message for a field, if it has one.
    pub fn for_field(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|v| v.field == field).map(|v| v.message)
    }

    /// Check whether a specific field and rule pair fired.
    pub fn contains(&self, field: Field, rule: Rule) -> bool {
        self.0
            .iter()
            .any(|v| v.field == field.name() && v.rule == rule)
    }

    /// Drop every violation for a field.
    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|v| v.field != field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl IntoIterator for Violations {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a FieldViolation;
    type IntoIter = std::slice::Iter<'a, FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Violations> for Vec<FieldViolation> {
    fn from(violations: Violations) -> Self {
        violations.0
    }
}
