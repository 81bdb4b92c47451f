//! Explicit request validation.
//!
//! Each request DTO implements [`ValidateRequest`] as a short ordered list
//! of field checks. The first violated constraint per field wins; violations
//! across fields are all collected and joined into a single
//! semicolon-separated message.

use std::fmt;

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Required { field: &'static str },
    Min { field: &'static str, bound: i64 },
    Max { field: &'static str, bound: i64 },
    Email { field: &'static str },
    Tag { field: &'static str, tag: &'static str },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::Min { field, bound } => write!(f, "{} must be greater than {}", field, bound),
            Self::Max { field, bound } => write!(f, "{} must be less than {}", field, bound),
            Self::Email { field } => write!(f, "{} is not a valid email", field),
            Self::Tag { field, tag } => write!(f, "{} is not valid for tag {}", field, tag),
        }
    }
}

/// Aggregated violations for a whole request, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joined human-readable message, e.g.
    /// `"email is required; age must be greater than 18"`.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation that either passes entirely or rejects the request before
/// it reaches storage.
pub trait ValidateRequest {
    fn validate(&self) -> Result<(), Violations>;
}

/// Minimal email syntax check: a non-empty local part, a single `@`, and a
/// domain containing an interior dot.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Domain needs a dot that is neither leading nor trailing.
    domain
        .find('.')
        .is_some_and(|i| i > 0 && i < domain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
    }

    #[test]
    fn rejects_missing_at_or_domain() {
        assert!(!is_valid_email("alice.example.com"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@localhost"));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email("alice@example."));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn violation_messages_match_expected_phrasing() {
        assert_eq!(
            Violation::Required { field: "email" }.to_string(),
            "email is required"
        );
        assert_eq!(
            Violation::Min { field: "age", bound: 18 }.to_string(),
            "age must be greater than 18"
        );
        assert_eq!(
            Violation::Max { field: "age", bound: 100 }.to_string(),
            "age must be less than 100"
        );
        assert_eq!(
            Violation::Email { field: "email" }.to_string(),
            "email is not a valid email"
        );
        assert_eq!(
            Violation::Tag { field: "name", tag: "uuid" }.to_string(),
            "name is not valid for tag uuid"
        );
    }

    #[test]
    fn joined_message_is_semicolon_separated() {
        let violations = Violations(vec![
            Violation::Required { field: "email" },
            Violation::Min { field: "age", bound: 18 },
        ]);
        assert_eq!(
            violations.joined(),
            "email is required; age must be greater than 18"
        );
    }
}
