//! Employee row model.

use roster_core::employee::Employee;
use roster_core::types::{EmployeeId, Timestamp};
use sqlx::FromRow;

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
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

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            department: row.department,
            salary: row.salary,
            join_date: row.join_date,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
