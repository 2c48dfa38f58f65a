pub mod employee;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /employees           list, create
/// /employees/{id}      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/employees", employee::router())
}
