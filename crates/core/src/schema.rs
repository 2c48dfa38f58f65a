//! Store-level schema for employee records.
//!
//! Every gateway runs [`enforce`] before a write, on insert and on update
//! alike. The email pattern is shared with the request validator so a value
//! accepted at the gate is never rejected here.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError};

use crate::employee::EmployeeDraft;
use crate::error::{FieldError, FieldErrors};

/// Fixed email syntax accepted by the store. Word characters are ASCII only.
pub const EMAIL_PATTERN: &str =
    r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$";

/// Order in which field errors are reported.
pub const FIELD_ORDER: [&str; 7] = [
    "name",
    "email",
    "role",
    "department",
    "salary",
    "joinDate",
    "isActive",
];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Whether `email` matches [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub(crate) fn validate_email_pattern(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        return Ok(());
    }
    let mut err = ValidationError::new("email");
    err.message = Some(Cow::Borrowed("Please enter a valid email"));
    Err(err)
}

/// Check a draft against the store schema.
pub fn enforce(draft: &EmployeeDraft) -> Result<(), FieldErrors> {
    let Err(report) = draft.validate() else {
        return Ok(());
    };

    let mut errors: Vec<FieldError> = report
        .field_errors()
        .into_iter()
        .filter_map(|(field, violations)| {
            violations.first().map(|v| {
                let message = v
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                FieldError::new(field.to_string(), message)
            })
        })
        .collect();
    errors.sort_by_key(|e| field_rank(&e.field));
    Err(FieldErrors::from(errors))
}

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len())
}
