//! Uniform JSON response envelope shared by the API and its client.
//!
//! Every response, success or failure, has the shape
//!
//! ```json
//! { "success": true, "count": 3, "message": "...", "data": ..., "error": "...", "errors": [...] }
//! ```
//!
//! with absent members omitted.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldErrors};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl<T> Envelope<T> {
    fn base(success: bool) -> Self {
        Self {
            success,
            count: None,
            message: None,
            data: None,
            error: None,
            errors: Vec::new(),
        }
    }

    /// `{ success: true, data }`
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::base(true)
        }
    }

    /// `{ success: true, message }`
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::base(true)
        }
    }

    /// `{ success: false, message }`
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::base(false)
        }
    }

    /// `{ success: false, errors }`
    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            errors: errors.into_inner(),
            ..Self::base(false)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl<T> Envelope<Vec<T>> {
    /// `{ success: true, count, data }`
    pub fn list(items: Vec<T>) -> Self {
        Self {
            count: Some(items.len()),
            data: Some(items),
            ..Self::base(true)
        }
    }
}
