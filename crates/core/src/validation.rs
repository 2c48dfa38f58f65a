//! Request validator for create/update payloads.
//!
//! Pure logic, no store access. Used by the HTTP gate in front of the
//! service and by the client form for immediate feedback, so both sides
//! always agree on what a valid record is.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::employee::{EmployeeDraft, EmployeePayload};
use crate::error::FieldErrors;
use crate::schema::is_valid_email;
use crate::types::Timestamp;

pub const NAME_LEN: (usize, usize) = (2, 100);
pub const ROLE_LEN: (usize, usize) = (2, 50);
pub const DEPARTMENT_LEN: (usize, usize) = (2, 50);

/// Validate and normalize a payload.
///
/// Every rule is checked; the first failing rule of each field contributes
/// one message. On success text fields come back trimmed and the email
/// trimmed and lowercased.
pub fn validate_employee(payload: &EmployeePayload) -> Result<EmployeeDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = check_text(
        &mut errors,
        "name",
        "Name",
        text_of(payload.name.as_ref()).as_deref(),
        NAME_LEN,
    );
    let email = check_email(&mut errors, text_of(payload.email.as_ref()).as_deref());
    let role = check_text(
        &mut errors,
        "role",
        "Role",
        text_of(payload.role.as_ref()).as_deref(),
        ROLE_LEN,
    );
    let department = check_text(
        &mut errors,
        "department",
        "Department",
        text_of(payload.department.as_ref()).as_deref(),
        DEPARTMENT_LEN,
    );
    let salary = check_salary(&mut errors, payload.salary.as_ref());
    let join_date = check_join_date(&mut errors, payload.join_date.as_ref());

    if !errors.is_empty() {
        return Err(errors);
    }

    // All `None`s were recorded as errors above.
    match (name, email, role, department, salary) {
        (Some(name), Some(email), Some(role), Some(department), Some(salary)) => {
            Ok(EmployeeDraft {
                name,
                email,
                role,
                department,
                salary,
                join_date,
                is_active: payload.is_active,
            })
        }
        _ => Err(errors),
    }
}

/// Trim/lowercase an email the same way the validator does.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Text form of a loose JSON field. Numbers and booleans are read in their
/// JSON spelling; `null`, arrays and objects carry no text.
fn text_of(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn check_text(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: Option<&str>,
    (min, max): (usize, usize),
) -> Option<String> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        errors.push(field, &format!("{label} is required"));
        return None;
    }
    let len = trimmed.chars().count();
    if len < min || len > max {
        errors.push(
            field,
            &format!("{label} must be between {min} and {max} characters"),
        );
        return None;
    }
    Some(trimmed.to_string())
}

fn check_email(errors: &mut FieldErrors, value: Option<&str>) -> Option<String> {
    let email = value.map(normalize_email).unwrap_or_default();
    if email.is_empty() {
        errors.push("email", "Email is required");
        return None;
    }
    if !is_valid_email(&email) {
        errors.push("email", "Please enter a valid email");
        return None;
    }
    Some(email)
}

fn check_salary(errors: &mut FieldErrors, value: Option<&Value>) -> Option<f64> {
    let parsed = match value {
        None | Some(Value::Null) => {
            errors.push("salary", "Salary is required");
            return None;
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push("salary", "Salary is required");
            return None;
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(salary) if salary.is_finite() => {
            if salary < 0.0 {
                errors.push("salary", "Salary cannot be negative");
                None
            } else {
                Some(salary)
            }
        }
        _ => {
            errors.push("salary", "Salary must be a number");
            None
        }
    }
}

fn check_join_date(errors: &mut FieldErrors, value: Option<&Value>) -> Option<Timestamp> {
    let parsed = match value? {
        Value::Null => return None,
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => parse_join_date(s.trim()),
        _ => None,
    };
    match parsed {
        Some(ts) => Some(ts),
        None => {
            errors.push("joinDate", "Join date must be a valid date");
            None
        }
    }
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_join_date(input: &str) -> Option<Timestamp> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
