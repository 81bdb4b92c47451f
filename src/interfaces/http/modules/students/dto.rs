//! Student DTOs
//!
//! The create request keeps every field optional at the serde level so a
//! missing field surfaces as a `required` violation with the other field
//! errors, instead of a bare deserialization failure.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Student;
use crate::shared::validations::{is_valid_email, ValidateRequest, Violation, Violations};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;

/// Request body for `POST /students`
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl CreateStudentRequest {
    // Field accessors are only meaningful once validation has passed.

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn age(&self) -> i32 {
        self.age.unwrap_or_default()
    }
}

impl ValidateRequest for CreateStudentRequest {
    /// Field checks in declaration order; first violated constraint per
    /// field wins. A zero age counts as absent, matching the zero-value
    /// semantics of `required`.
    fn validate(&self) -> Result<(), Violations> {
        let mut violations = Vec::new();

        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {}
            _ => violations.push(Violation::Required { field: "name" }),
        }

        match self.email.as_deref() {
            None | Some("") => violations.push(Violation::Required { field: "email" }),
            Some(email) if !is_valid_email(email) => {
                violations.push(Violation::Email { field: "email" })
            }
            _ => {}
        }

        match self.age {
            None | Some(0) => violations.push(Violation::Required { field: "age" }),
            Some(age) if i64::from(age) < MIN_AGE => violations.push(Violation::Min {
                field: "age",
                bound: MIN_AGE,
            }),
            Some(age) if i64::from(age) > MAX_AGE => violations.push(Violation::Max {
                field: "age",
                bound: MAX_AGE,
            }),
            _ => {}
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Violations(violations))
        }
    }
}

/// Response body for a successful create: the assigned identifier.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentResponse {
    pub id: i64,
}

/// Student API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            age: s.age,
        }
    }
}

/// Query parameters for `GET /students`.
///
/// Kept as raw strings so non-numeric values fall back to the defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListStudentsParams {
    /// Page number, 1-based. Default: 1
    pub page: Option<String>,
    /// Page size, clamped to 1..=100. Default: 20
    pub limit: Option<String>,
}
