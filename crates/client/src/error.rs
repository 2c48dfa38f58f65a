use roster_core::error::FieldErrors;
use thiserror::Error;

/// Failures talking to the roster API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS, ...
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a failure envelope (or an unreadable body
    /// on a non-2xx status).
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
        errors: FieldErrors,
    },

    /// A success status whose body was not the expected envelope.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text for a failure notification: the server's message when it sent
    /// one, otherwise `fallback`.
    pub fn notice_text(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Field errors returned with a 400, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClientError::Api { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ClientError::Api {
            status: 400,
            message: Some("Email already exists".into()),
            errors: FieldErrors::new(),
        };
        assert_eq!(err.notice_text("Failed to create employee"), "Email already exists");
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn validation_failure_uses_fallback_and_exposes_fields() {
        let mut errors = FieldErrors::new();
        errors.push("salary", "Salary cannot be negative");
        let err = ClientError::Api {
            status: 400,
            message: None,
            errors,
        };
        assert_eq!(err.notice_text("Failed to create employee"), "Failed to create employee");
        assert_eq!(
            err.field_errors().and_then(|e| e.get("salary")),
            Some("Salary cannot be negative")
        );
    }

    #[test]
    fn decode_error_uses_fallback() {
        let err = ClientError::Decode("missing data".into());
        assert_eq!(err.notice_text("Failed to fetch employees"), "Failed to fetch employees");
    }
}
