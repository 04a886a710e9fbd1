use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;
use crate::field::{ContactValues, Field};
use crate::report::ValidationReport;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern; compiling it cannot fail.
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Whether `s` has the shape of an email address.
pub fn is_email(s: &str) -> bool {
    !s.starts_with('.') && !s.contains("..") && EMAIL.is_match(s)
}

/// A single constraint on one field's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// At least `n` Unicode scalar values.
    MinChars(usize),
    Email,
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match *self {
            Rule::MinChars(n) => value.chars().count() >= n,
            Rule::Email => is_email(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: String,
}

impl FieldRule {
    pub fn new(field: Field, rule: Rule, message: impl Into<String>) -> Self {
        Self { field, rule, message: message.into() }
    }
}

/// Ordered list of field rules, evaluated in one pass.
///
/// When a field has several rules the first failing one reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::contact()
    }
}

impl Schema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// The portfolio contact form rules.
    pub fn contact() -> Self {
        Self::new(vec![
            FieldRule::new(Field::Name, Rule::MinChars(2), "Name must be at least 2 characters."),
            FieldRule::new(Field::Email, Rule::Email, "Please enter a valid email address."),
            FieldRule::new(Field::Subject, Rule::MinChars(5), "Subject must be at least 5 characters."),
            FieldRule::new(Field::Message, Rule::MinChars(10), "Message must be at least 10 characters."),
        ])
    }

    /// First failing rule for `field`, if any.
    pub fn validate_field(&self, field: Field, values: &ContactValues) -> Option<FieldError> {
        let value = values.get(field);
        self.rules
            .iter()
            .filter(|r| r.field == field)
            .find(|r| !r.rule.check(value))
            .map(|r| FieldError::new(field, r.message.clone()))
    }

    pub fn validate(&self, values: &ContactValues) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            if report.error(rule.field).is_some() {
                continue;
            }
            if !rule.rule.check(values.get(rule.field)) {
                report.set(rule.field, Some(FieldError::new(rule.field, rule.message.clone())));
            }
        }
        report
    }
}
