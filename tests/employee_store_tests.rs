//! Tests for the in-memory store implementation.

use employee_api::error::EmployeeError;
use employee_api::model::employee::NewEmployee;
use employee_api::store::{EmployeeStore, MemoryEmployeeStore};

fn new_employee(email: &str) -> NewEmployee {
    NewEmployee {
        email: email.to_string(),
        name: "jat".to_string(),
        salary: 341,
    }
}

#[actix_web::test]
async fn find_by_email_returns_row_when_present() {
    let store = MemoryEmployeeStore::new();
    let saved = store.insert(new_employee("jat2@gmail.com")).await.unwrap();

    let found = store.find_by_email(&saved.email).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0], saved);
}

#[actix_web::test]
async fn find_by_email_returns_empty_when_absent() {
    let store = MemoryEmployeeStore::new();

    let found = store.find_by_email("notPresent@gmail.com").await.unwrap();

    assert!(found.is_empty());
}

#[actix_web::test]
async fn insert_assigns_monotonic_ids() {
    let store = MemoryEmployeeStore::new();

    let first = store.insert(new_employee("a@x.com")).await.unwrap();
    let second = store.insert(new_employee("b@x.com")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[actix_web::test]
async fn insert_rejects_duplicate_email() {
    let store = MemoryEmployeeStore::new();
    store.insert(new_employee("jat2@gmail.com")).await.unwrap();

    let err = store
        .insert(new_employee("jat2@gmail.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, EmployeeError::AlreadyExists(_)));
    assert_eq!(store.row_count(), 1);
}

#[actix_web::test]
async fn update_fails_for_missing_row() {
    let store = MemoryEmployeeStore::new();
    let mut row = store.insert(new_employee("jat2@gmail.com")).await.unwrap();
    store.delete_by_id(row.id).await.unwrap();

    row.name = "renamed".to_string();
    let err = store.update(&row).await.unwrap_err();

    assert!(matches!(err, EmployeeError::NotFound(_)));
}

#[actix_web::test]
async fn delete_removes_row() {
    let store = MemoryEmployeeStore::new();
    let saved = store.insert(new_employee("jat2@gmail.com")).await.unwrap();

    store.delete_by_id(saved.id).await.unwrap();

    assert!(store.find_by_id(saved.id).await.unwrap().is_none());
    assert!(!store.exists_by_id(saved.id).await.unwrap());
}
