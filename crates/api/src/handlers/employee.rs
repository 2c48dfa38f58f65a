//! Handlers for the `/employees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::employee::Employee;
use roster_core::envelope::Envelope;

use crate::error::AppResult;
use crate::extract::ValidatedEmployee;
use crate::state::AppState;

pub const MSG_CREATED: &str = "Employee created successfully";
pub const MSG_UPDATED: &str = "Employee updated successfully";
pub const MSG_DELETED: &str = "Employee deleted successfully";

/// GET /api/employees
///
/// Newest first, with a `count` alongside the data.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<Vec<Employee>>>> {
    let employees = state.employees.list().await?;
    Ok(Json(Envelope::list(employees)))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<Employee>>> {
    let employee = state.employees.get(&id).await?;
    Ok(Json(Envelope::data(employee)))
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    ValidatedEmployee(draft): ValidatedEmployee,
) -> AppResult<(StatusCode, Json<Envelope<Employee>>)> {
    let employee = state.employees.create(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(employee).with_message(MSG_CREATED)),
    ))
}

/// PUT /api/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedEmployee(draft): ValidatedEmployee,
) -> AppResult<Json<Envelope<Employee>>> {
    let employee = state.employees.update(&id, draft).await?;
    Ok(Json(Envelope::data(employee).with_message(MSG_UPDATED)))
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<()>>> {
    state.employees.delete(&id).await?;
    Ok(Json(Envelope::message(MSG_DELETED)))
}
