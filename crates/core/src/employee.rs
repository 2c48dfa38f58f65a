//! Employee record model and write DTOs.
//!
//! - [`Employee`] is the stored record as returned by every read.
//! - [`EmployeePayload`] is the raw create/update body, loosely typed so the
//!   request validator can report every problem at once.
//! - [`EmployeeDraft`] is the canonical, validated write model handed to the
//!   store. Its `validator` attributes are the store-level schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::types::{EmployeeId, Timestamp};

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Employee";

/// A stored employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub salary: f64,
    pub join_date: Timestamp,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create/update request body.
///
/// Every validated field stays a raw JSON value so a wrongly typed field
/// becomes a field error rather than a body rejection. Numeric salaries may
/// arrive as strings and text fields may arrive as numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<&Employee> for EmployeePayload {
    fn from(employee: &Employee) -> Self {
        Self {
            name: Some(Value::from(employee.name.as_str())),
            email: Some(Value::from(employee.email.as_str())),
            role: Some(Value::from(employee.role.as_str())),
            department: Some(Value::from(employee.department.as_str())),
            salary: Some(Value::from(employee.salary)),
            join_date: Some(Value::from(employee.join_date.to_rfc3339())),
            is_active: Some(employee.is_active),
        }
    }
}

/// Normalized write model. `None` for `join_date` / `is_active` means
/// "store default" on insert and "keep current value" on update.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct EmployeeDraft {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(custom(function = "crate::schema::validate_email_pattern"))]
    pub email: String,
    #[validate(length(min = 2, max = 50, message = "Role must be between 2 and 50 characters"))]
    pub role: String,
    #[validate(length(
        min = 2,
        max = 50,
        message = "Department must be between 2 and 50 characters"
    ))]
    pub department: String,
    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub salary: f64,
    pub join_date: Option<Timestamp>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn employee_serializes_camel_case() {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let employee = Employee {
            id: uuid::Uuid::nil(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            role: "Engineer".into(),
            department: "Research".into(),
            salary: 1200.5,
            join_date: ts,
            is_active: true,
            created_at: ts,
            updated_at: ts,
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["joinDate"], "2024-01-02T03:04:05Z");
        assert_eq!(json["isActive"], true);
        assert!(json.get("created_at").is_none());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn payload_accepts_missing_fields() {
        let payload: EmployeePayload =
            serde_json::from_value(serde_json::json!({ "name": "Bo" })).unwrap();
        assert_eq!(payload.name, Some(serde_json::json!("Bo")));
        assert!(payload.salary.is_none());
        assert!(payload.is_active.is_none());
    }

    #[test]
    fn payload_skips_unset_fields_when_serialized() {
        let payload = EmployeePayload {
            name: Some(Value::from("Bo")),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Bo" }));
    }

    #[test]
    fn payload_keeps_wrongly_typed_fields() {
        let payload: EmployeePayload = serde_json::from_value(serde_json::json!({
            "name": 123,
            "email": ["a@b.com"],
            "joinDate": false
        }))
        .unwrap();
        assert_eq!(payload.name, Some(Value::from(123)));
        assert!(payload.email.as_ref().is_some_and(Value::is_array));
        assert_eq!(payload.join_date, Some(Value::Bool(false)));
    }
}
