use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::envelope::Envelope;
use roster_core::error::CoreError;

pub const MSG_NOT_FOUND: &str = "Employee not found";
pub const MSG_DUPLICATE_EMAIL: &str = "Email already exists";
pub const MSG_SERVER_ERROR: &str = "Server Error";
pub const MSG_INVALID_BODY: &str = "Invalid request body";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for service outcomes and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An outcome from the record service or the request validator.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The body was not JSON, or not shaped like an employee payload.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(core) => match core {
                CoreError::Validation(errors) => {
                    (StatusCode::BAD_REQUEST, Envelope::<()>::invalid(errors))
                }
                CoreError::DuplicateEmail => (
                    StatusCode::BAD_REQUEST,
                    Envelope::failure(MSG_DUPLICATE_EMAIL),
                ),
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, Envelope::failure(MSG_NOT_FOUND))
                }
                CoreError::Infrastructure(msg) => {
                    tracing::error!(error = %msg, "Infrastructure error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Envelope::failure(MSG_SERVER_ERROR).with_error(msg),
                    )
                }
            },

            AppError::InvalidBody(rejection) => (
                StatusCode::BAD_REQUEST,
                Envelope::failure(MSG_INVALID_BODY).with_error(rejection.body_text()),
            ),
        };

        (status, Json(body)).into_response()
    }
}
