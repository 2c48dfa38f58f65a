//! PostgreSQL-backed gateway.

use async_trait::async_trait;
use roster_core::employee::{Employee, EmployeeDraft};
use roster_core::schema;
use roster_core::store::{EmployeeStore, StoreError};
use roster_core::types::EmployeeId;

use crate::repositories::employee_repo::classify_write_error;
use crate::repositories::EmployeeRepo;
use crate::DbPool;

/// Gateway over the `employees` table. Email uniqueness is enforced by the
/// `uq_employees_email` index, so concurrent writers never race.
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = EmployeeRepo::list(&self.pool)
            .await
            .map_err(classify_write_error)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError> {
        let row = EmployeeRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify_write_error)?;
        Ok(row.map(Employee::from))
    }

    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, StoreError> {
        schema::enforce(draft).map_err(StoreError::Schema)?;
        let row = EmployeeRepo::create(&self.pool, EmployeeId::now_v7(), draft)
            .await
            .map_err(classify_write_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, StoreError> {
        schema::enforce(draft).map_err(StoreError::Schema)?;
        let row = EmployeeRepo::update(&self.pool, id, draft)
            .await
            .map_err(classify_write_error)?;
        Ok(row.map(Employee::from))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, StoreError> {
        EmployeeRepo::hard_delete(&self.pool, id)
            .await
            .map_err(classify_write_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
