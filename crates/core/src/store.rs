//! Persistence seam between the record service and a concrete gateway.

use async_trait::async_trait;

use crate::employee::{Employee, EmployeeDraft};
use crate::error::FieldErrors;
use crate::types::EmployeeId;

/// Failures a gateway can report. Anything store-specific must already be
/// translated into one of these before it leaves the gateway.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The email uniqueness constraint rejected the write.
    #[error("duplicate email")]
    DuplicateEmail,

    /// The write violated the store schema; nothing was persisted.
    #[error("schema violation: {0}")]
    Schema(FieldErrors),

    /// The store could not be reached or failed unexpectedly.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Record store gateway: sole writer of persisted employee state.
///
/// Implementations must enforce email uniqueness atomically with the write
/// itself (no check-then-act) and must re-run the schema on every write.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    async fn find(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError>;

    /// Insert a new record, assigning its id and timestamps.
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, StoreError>;

    /// Replace the fields of an existing record. `Ok(None)` if `id` is unknown.
    async fn update(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, StoreError>;

    /// Permanently remove a record. Returns `true` if a record was removed.
    async fn delete(&self, id: EmployeeId) -> Result<bool, StoreError>;

    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
