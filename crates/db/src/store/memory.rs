//! Process-local gateway used when no database is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use roster_core::employee::{Employee, EmployeeDraft};
use roster_core::schema;
use roster_core::store::{EmployeeStore, StoreError};
use roster_core::types::EmployeeId;
use tokio::sync::RwLock;

/// In-memory employee store.
///
/// The email index is only touched under the same write lock as the record
/// map, so uniqueness holds for concurrent writers exactly as a database
/// unique index would.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    records: HashMap<EmployeeId, Entry>,
    /// Lowercased email -> owning record.
    emails: HashMap<String, EmployeeId>,
    next_seq: u64,
}

struct Entry {
    /// Insertion order, for a stable newest-first listing.
    seq: u64,
    employee: Employee,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.to_lowercase()
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Entry> = inner.records.values().collect();
        entries.sort_by(|a, b| {
            b.employee
                .created_at
                .cmp(&a.employee.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(entries.into_iter().map(|e| e.employee.clone()).collect())
    }

    async fn find(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(&id).map(|e| e.employee.clone()))
    }

    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, StoreError> {
        schema::enforce(draft).map_err(StoreError::Schema)?;

        let mut inner = self.inner.write().await;
        let key = email_key(&draft.email);
        if inner.emails.contains_key(&key) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId::now_v7(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            role: draft.role.clone(),
            department: draft.department.clone(),
            salary: draft.salary,
            join_date: draft.join_date.unwrap_or(now),
            is_active: draft.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.emails.insert(key, employee.id);
        inner.records.insert(
            employee.id,
            Entry {
                seq,
                employee: employee.clone(),
            },
        );
        Ok(employee)
    }

    async fn update(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, StoreError> {
        schema::enforce(draft).map_err(StoreError::Schema)?;

        let mut guard = self.inner.write().await;
        let inner = &mut *guard;
        let Some(entry) = inner.records.get_mut(&id) else {
            return Ok(None);
        };

        let new_key = email_key(&draft.email);
        if inner.emails.get(&new_key).is_some_and(|owner| *owner != id) {
            return Err(StoreError::DuplicateEmail);
        }

        let current = &mut entry.employee;
        let old_key = email_key(&current.email);
        if old_key != new_key {
            inner.emails.remove(&old_key);
            inner.emails.insert(new_key, id);
        }

        current.name = draft.name.clone();
        current.email = draft.email.clone();
        current.role = draft.role.clone();
        current.department = draft.department.clone();
        current.salary = draft.salary;
        if let Some(join_date) = draft.join_date {
            current.join_date = join_date;
        }
        if let Some(is_active) = draft.is_active {
            current.is_active = is_active;
        }
        current.updated_at = Utc::now();
        Ok(Some(current.clone()))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.records.remove(&id) {
            Some(entry) => {
                inner.emails.remove(&email_key(&entry.employee.email));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
