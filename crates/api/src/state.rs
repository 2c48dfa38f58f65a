use std::sync::Arc;

use roster_core::service::EmployeeService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record service over whichever store was configured.
    pub employees: EmployeeService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
