use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use super::{MemberName, NewMember, Role};

pub const EMPTY_NAME_MESSAGE: &str = "Name cannot be empty.";
pub const INVALID_ROLE_MESSAGE: &str =
    "Role must be one of the following: backend, frontend, UI/UX.";

/// Unvalidated member input, as it would arrive from a fixture or a form.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CandidateMember {
    #[validate(length(min = 1, message = "Name cannot be empty."))]
    pub name: String,
    #[validate(custom = "validate_role")]
    pub role: String,
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<Role>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("role");
        error.message = Some(Cow::from(INVALID_ROLE_MESSAGE));
        error
    })
}

impl CandidateMember {
    pub fn new(name: &str, role: &str) -> Self {
        Self {
            name: name.to_owned(),
            role: role.to_owned(),
        }
    }

    /// Checks the candidate against the member schema without panicking or
    /// short-circuiting: every violated field is reported.
    pub fn parse(&self) -> Result<NewMember, MemberValidationError> {
        let mut error = match self.validate() {
            Ok(()) => MemberValidationError::default(),
            Err(errors) => MemberValidationError::from(errors),
        };

        let name = MemberName::parse(&self.name);
        if let Err(e) = &name {
            error.add_if_missing("name", e.as_ref());
        }
        let role = self.role.parse::<Role>();
        if role.is_err() {
            error.add_if_missing("role", INVALID_ROLE_MESSAGE);
        }

        match (name, role) {
            (Ok(name), Ok(role)) if error.violations.is_empty() => {
                Ok(NewMember::new(name, role))
            }
            _ => Err(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberValidationError {
    pub violations: Vec<FieldViolation>,
}

impl MemberValidationError {
    /// Keeps the schema's message when it already flagged `field`.
    fn add_if_missing(&mut self, field: &str, message: &str) {
        if self.violations.iter().any(|v| v.field == field) {
            return;
        }
        self.violations.push(FieldViolation {
            field: field.to_owned(),
            message: message.to_owned(),
        });
        self.violations.sort_by(|a, b| a.field.cmp(&b.field));
    }

    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

impl From<ValidationErrors> for MemberValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldViolation {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Self { violations }
    }
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        write!(f, "{}", details.join("; "))
    }
}

impl std::error::Error for MemberValidationError {}
