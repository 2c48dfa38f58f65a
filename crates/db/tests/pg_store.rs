//! Integration tests for the PostgreSQL gateway.
//!
//! These need a live server: run with `DATABASE_URL=... cargo test -- --ignored`.
//! `#[sqlx::test]` creates a fresh database per test and applies the
//! migrations under `crates/db/migrations`.

use std::sync::Arc;

use assert_matches::assert_matches;
use roster_core::employee::EmployeeDraft;
use roster_core::store::{EmployeeStore, StoreError};
use roster_core::types::EmployeeId;
use roster_db::PgEmployeeStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn draft(name: &str, email: &str) -> EmployeeDraft {
    EmployeeDraft {
        name: name.to_string(),
        email: email.to_string(),
        role: "Engineer".to_string(),
        department: "Platform".to_string(),
        salary: 7000.0,
        join_date: None,
        is_active: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn insert_then_find_round_trips(pool: PgPool) {
    let store = PgEmployeeStore::new(pool);
    let created = store.insert(&draft("Ann Lee", "ann@example.com")).await.unwrap();

    let found = store.find(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Ann Lee");
    assert_eq!(found.email, "ann@example.com");
    assert!(found.is_active);
    assert_eq!(found.created_at, found.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn unique_index_rejects_second_row(pool: PgPool) {
    let store = PgEmployeeStore::new(pool);
    store.insert(&draft("Ann Lee", "ann@example.com")).await.unwrap();

    // Go around the gateway so the unique index itself rejects the row.
    let err = sqlx::query(
        "INSERT INTO employees (id, name, email, role, department, salary)
         VALUES ($1, 'Ann Two', 'ann@example.com', 'Eng', 'Ops', 1)",
    )
    .bind(EmployeeId::now_v7())
    .execute(store.pool())
    .await
    .unwrap_err();
    assert_matches!(
        roster_db::repositories::employee_repo::classify_write_error(err),
        StoreError::DuplicateEmail
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn check_constraint_maps_to_schema_error(pool: PgPool) {
    let err = sqlx::query(
        "INSERT INTO employees (id, name, email, role, department, salary)
         VALUES ($1, 'Ann Lee', 'ann@example.com', 'Eng', 'Ops', -1)",
    )
    .bind(EmployeeId::now_v7())
    .execute(&pool)
    .await
    .unwrap_err();

    assert_matches!(
        roster_db::repositories::employee_repo::classify_write_error(err),
        StoreError::Schema(errors) if errors.get("salary") == Some("Salary cannot be negative")
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn update_checks_uniqueness_against_other_rows(pool: PgPool) {
    let store = PgEmployeeStore::new(pool);
    let a = store.insert(&draft("Ann Lee", "ann@example.com")).await.unwrap();
    store.insert(&draft("Bob Ray", "bob@example.com")).await.unwrap();

    assert_matches!(
        store.update(a.id, &draft("Ann Lee", "bob@example.com")).await,
        Err(StoreError::DuplicateEmail)
    );

    let same = store
        .update(a.id, &draft("Ann Leigh", "ann@example.com"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(same.name, "Ann Leigh");
    assert!(same.updated_at >= same.created_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn list_is_newest_first_and_delete_is_hard(pool: PgPool) {
    let store = PgEmployeeStore::new(pool);
    let a = store.insert(&draft("Aa One", "a@x.com")).await.unwrap();
    store.insert(&draft("Bb Two", "b@x.com")).await.unwrap();
    store.insert(&draft("Cc Three", "c@x.com")).await.unwrap();

    let names: Vec<_> = store.list().await.unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, ["Cc Three", "Bb Two", "Aa One"]);

    assert!(store.delete(a.id).await.unwrap());
    assert!(!store.delete(a.id).await.unwrap());
    assert!(store.find(a.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn concurrent_inserts_admit_exactly_one(pool: PgPool) {
    let store = Arc::new(PgEmployeeStore::new(pool));
    let attempts = (0..4).map(|i| {
        let store = Arc::clone(&store);
        async move {
            store
                .insert(&draft(&format!("Racer {i}"), "race@example.com"))
                .await
        }
    });
    let results = futures::future::join_all(attempts).await;

    let ok = results.iter().filter(|r| r.is_ok()).count();
    let dup = results
        .iter()
        .filter(|r| matches!(r, Err(StoreError::DuplicateEmail)))
        .count();
    assert_eq!((ok, dup), (1, 3));
}
