//! Record service: the five employee operations over an [`EmployeeStore`].
//!
//! Holds no state of its own between calls. Gateway failures are mapped onto
//! [`CoreError`] here and nowhere else.

use std::sync::Arc;

use crate::employee::{Employee, EmployeeDraft, ENTITY};
use crate::error::CoreError;
use crate::store::{EmployeeStore, StoreError};
use crate::types::EmployeeId;

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => CoreError::DuplicateEmail,
            StoreError::Schema(errors) => CoreError::Validation(errors),
            StoreError::Unavailable(msg) => CoreError::Infrastructure(msg),
        }
    }
}

/// Cheaply cloneable handle to the record service.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// All records, most recently created first.
    pub async fn list(&self) -> Result<Vec<Employee>, CoreError> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Employee, CoreError> {
        let id = parse_id(raw_id)?;
        self.store
            .find(id)
            .await?
            .ok_or_else(|| not_found(raw_id))
    }

    /// Insert a validated draft. Duplicate emails surface from the store's
    /// constraint, never from a lookup made here.
    pub async fn create(&self, draft: EmployeeDraft) -> Result<Employee, CoreError> {
        let employee = self.store.insert(&draft).await?;
        tracing::info!(id = %employee.id, "Employee created");
        Ok(employee)
    }

    pub async fn update(&self, raw_id: &str, draft: EmployeeDraft) -> Result<Employee, CoreError> {
        let id = parse_id(raw_id)?;
        let employee = self
            .store
            .update(id, &draft)
            .await?
            .ok_or_else(|| not_found(raw_id))?;
        tracing::info!(%id, "Employee updated");
        Ok(employee)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), CoreError> {
        let id = parse_id(raw_id)?;
        if self.store.delete(id).await? {
            tracing::info!(%id, "Employee deleted");
            Ok(())
        } else {
            Err(not_found(raw_id))
        }
    }

    /// Store reachability, for health reporting.
    pub async fn ping(&self) -> Result<(), CoreError> {
        Ok(self.store.ping().await?)
    }
}

/// Malformed identifiers are reported exactly like unknown ones.
fn parse_id(raw_id: &str) -> Result<EmployeeId, CoreError> {
    raw_id.trim().parse().map_err(|_| not_found(raw_id))
}

fn not_found(raw_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: raw_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::error::FieldErrors;

    /// Store that knows no records and fails writes with a fixed error.
    struct EmptyStore {
        write_error: fn() -> StoreError,
    }

    #[async_trait]
    impl EmployeeStore for EmptyStore {
        async fn list(&self) -> Result<Vec<Employee>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn find(&self, _id: EmployeeId) -> Result<Option<Employee>, StoreError> {
            Ok(None)
        }

        async fn insert(&self, _draft: &EmployeeDraft) -> Result<Employee, StoreError> {
            Err((self.write_error)())
        }

        async fn update(
            &self,
            _id: EmployeeId,
            _draft: &EmployeeDraft,
        ) -> Result<Option<Employee>, StoreError> {
            Ok(None)
        }

        async fn delete(&self, _id: EmployeeId) -> Result<bool, StoreError> {
            Ok(false)
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn service(write_error: fn() -> StoreError) -> EmployeeService {
        EmployeeService::new(Arc::new(EmptyStore { write_error }))
    }

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Edsger Dijkstra".into(),
            email: "ewd@example.nl".into(),
            role: "Professor".into(),
            department: "Computing".into(),
            salary: 100.0,
            join_date: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let svc = service(|| StoreError::DuplicateEmail);
        assert_matches!(
            svc.get("not-a-uuid").await,
            Err(CoreError::NotFound { entity: "Employee", id }) if id == "not-a-uuid"
        );
        assert_matches!(svc.delete("123").await, Err(CoreError::NotFound { .. }));
        assert_matches!(
            svc.update("zzz", draft()).await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let svc = service(|| StoreError::DuplicateEmail);
        let id = uuid::Uuid::now_v7().to_string();
        assert_matches!(svc.get(&id).await, Err(CoreError::NotFound { .. }));
        assert_matches!(svc.update(&id, draft()).await, Err(CoreError::NotFound { .. }));
        assert_matches!(svc.delete(&id).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn store_errors_map_onto_taxonomy() {
        let svc = service(|| StoreError::DuplicateEmail);
        assert_matches!(svc.create(draft()).await, Err(CoreError::DuplicateEmail));

        let svc = service(|| {
            let mut errors = FieldErrors::new();
            errors.push("salary", "Salary cannot be negative");
            StoreError::Schema(errors)
        });
        assert_matches!(
            svc.create(draft()).await,
            Err(CoreError::Validation(errors)) if errors.get("salary").is_some()
        );

        assert_matches!(svc.list().await, Err(CoreError::Infrastructure(msg)) if msg == "connection refused");
    }
}
