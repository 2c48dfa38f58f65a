//! Repository for the `employees` table.

use roster_core::employee::EmployeeDraft;
use roster_core::error::FieldErrors;
use roster_core::store::StoreError;
use roster_core::types::EmployeeId;
use sqlx::PgPool;

use crate::models::employee::EmployeeRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, role, department, salary, join_date, is_active, created_at, updated_at";

/// Unique index on `lower(email)`.
pub const EMAIL_UNIQUE_INDEX: &str = "uq_employees_email";

/// CHECK constraints and the field each one guards.
const CHECK_CONSTRAINTS: [(&str, &str, &str); 5] = [
    (
        "ck_employees_name",
        "name",
        "Name must be between 2 and 100 characters",
    ),
    ("ck_employees_email", "email", "Please enter a valid email"),
    (
        "ck_employees_role",
        "role",
        "Role must be between 2 and 50 characters",
    ),
    (
        "ck_employees_department",
        "department",
        "Department must be between 2 and 50 characters",
    ),
    ("ck_employees_salary", "salary", "Salary cannot be negative"),
];

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee under `id`, returning the created row.
    ///
    /// `join_date` defaults to now and `is_active` to true when `None`.
    pub async fn create(
        pool: &PgPool,
        id: EmployeeId,
        input: &EmployeeDraft,
    ) -> Result<EmployeeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (id, name, email, role, department, salary, join_date, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()), COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.department)
            .bind(input.salary)
            .bind(input.join_date)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: EmployeeId,
    ) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every employee, newest first. Ids are v7 UUIDs, so they break
    /// ties between rows created in the same instant.
    pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM employees ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace an employee's fields. `join_date` and `is_active` keep their
    /// stored values when `None`. Returns `None` if no row has `id`.
    pub async fn update(
        pool: &PgPool,
        id: EmployeeId,
        input: &EmployeeDraft,
    ) -> Result<Option<EmployeeRow>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                name = $2,
                email = $3,
                role = $4,
                department = $5,
                salary = $6,
                join_date = COALESCE($7, join_date),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.department)
            .bind(input.salary)
            .bind(input.join_date)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an employee. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: EmployeeId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Translate a sqlx error into a [`StoreError`].
///
/// This is the only place that knows PostgreSQL's conflict signals:
/// - `23505` on [`EMAIL_UNIQUE_INDEX`] becomes `DuplicateEmail`.
/// - `23514` on a known CHECK constraint becomes a schema failure for its field.
/// - Everything else is reported as the store being unavailable.
pub fn classify_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or_default();
        match db_err.code().as_deref() {
            Some("23505") if constraint == EMAIL_UNIQUE_INDEX => {
                return StoreError::DuplicateEmail;
            }
            Some("23514") => {
                if let Some((_, field, message)) =
                    CHECK_CONSTRAINTS.iter().find(|(name, _, _)| *name == constraint)
                {
                    let mut errors = FieldErrors::new();
                    errors.push(field, message);
                    return StoreError::Schema(errors);
                }
            }
            _ => {}
        }
    }
    tracing::error!(error = %err, "Database error");
    StoreError::Unavailable(err.to_string())
}
