//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use roster_api::error::AppError;
use roster_core::error::{CoreError, FieldErrors};
use serde_json::json;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400_with_field_list() {
    let mut errors = FieldErrors::new();
    errors.push("name", "Name is required");
    errors.push("salary", "Salary cannot be negative");

    let (status, json) = error_to_response(AppError::Core(CoreError::Validation(errors))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({
            "success": false,
            "errors": [
                { "field": "name", "message": "Name is required" },
                { "field": "salary", "message": "Salary cannot be negative" }
            ]
        })
    );
}

#[tokio::test]
async fn duplicate_email_returns_400_with_message() {
    let (status, json) = error_to_response(AppError::Core(CoreError::DuplicateEmail)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "success": false, "message": "Email already exists" }));
}

#[tokio::test]
async fn not_found_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Employee",
        id: "abc".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "success": false, "message": "Employee not found" }));
}

#[tokio::test]
async fn infrastructure_returns_500_with_detail() {
    let err = AppError::Core(CoreError::Infrastructure("connection refused".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Server Error");
    assert_eq!(json["error"], "connection refused");
}
