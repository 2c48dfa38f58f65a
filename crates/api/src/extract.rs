//! Request validator gate for create/update bodies.

use axum::extract::{FromRequest, Request};
use axum::Json;
use roster_core::employee::{EmployeeDraft, EmployeePayload};
use roster_core::error::CoreError;
use roster_core::validation::validate_employee;

use crate::error::AppError;

/// A create/update body that passed the request validator.
///
/// Use it in place of `Json<..>` so invalid payloads are rejected with the
/// full list of field errors before the handler (and the service) runs:
///
/// ```ignore
/// async fn create(State(state): State<AppState>, ValidatedEmployee(draft): ValidatedEmployee) { .. }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedEmployee(pub EmployeeDraft);

impl<S> FromRequest<S> for ValidatedEmployee
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<EmployeePayload>::from_request(req, state).await?;
        let draft = validate_employee(&payload).map_err(|errors| {
            tracing::debug!(%errors, "Rejected employee payload");
            CoreError::Validation(errors)
        })?;
        Ok(Self(draft))
    }
}
