//! Integration tests for SqliteUserRepository.
//!
//! These tests run against an in-memory SQLite database.

mod common;

use common::TestDatabase;
use userapi_core::UserApiError;
use userapi_repository::{SqliteUserRepository, UserRepository};

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    let id = repo
        .insert(Some("Ada"), Some("ada@example.com"))
        .await
        .expect("Failed to insert user");
    assert!(id > 0);

    let found = repo
        .find_by_id(&id.to_string())
        .await
        .expect("Query failed")
        .expect("User not found");

    assert_eq!(found.id, id);
    assert_eq!(found.name, "Ada");
    assert_eq!(found.email, "ada@example.com");
}

#[tokio::test]
async fn test_ids_are_assigned_sequentially_and_not_reused() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    let first = repo.insert(Some("A"), Some("a@example.com")).await.unwrap();
    let second = repo.insert(Some("B"), Some("b@example.com")).await.unwrap();
    assert!(second > first);

    // AUTOINCREMENT: a deleted id is never handed out again.
    repo.delete(&second.to_string()).await.unwrap();
    let third = repo.insert(Some("C"), Some("c@example.com")).await.unwrap();
    assert!(third > second);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    let result = repo.find_by_id("9999").await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_by_non_numeric_id_matches_nothing() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    repo.insert(Some("Ada"), Some("ada@example.com"))
        .await
        .unwrap();

    let result = repo.find_by_id("not-a-number").await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_returns_every_row() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    assert!(repo.find_all().await.unwrap().is_empty());

    repo.insert(Some("A"), Some("a@example.com")).await.unwrap();
    repo.insert(Some("B"), Some("b@example.com")).await.unwrap();
    repo.insert(Some("C"), Some("c@example.com")).await.unwrap();

    let users = repo.find_all().await.unwrap();
    assert_eq!(users.len(), 3);

    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert!(emails.contains(&"a@example.com"));
    assert!(emails.contains(&"b@example.com"));
    assert!(emails.contains(&"c@example.com"));
}

#[tokio::test]
async fn test_duplicate_email_is_a_constraint_violation() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    repo.insert(Some("Ada"), Some("ada@example.com"))
        .await
        .unwrap();

    let err = repo
        .insert(Some("Impostor"), Some("ada@example.com"))
        .await
        .expect_err("Duplicate email must be rejected");

    assert!(matches!(err, UserApiError::ConstraintViolation(_)));
    assert!(err.to_string().contains("UNIQUE"));

    // No row was added.
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_fields_surface_as_not_null_violation() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    let err = repo
        .insert(None, Some("ada@example.com"))
        .await
        .expect_err("NULL name must be rejected");
    assert!(matches!(err, UserApiError::ConstraintViolation(_)));

    let err = repo
        .insert(Some("Ada"), None)
        .await
        .expect_err("NULL email must be rejected");
    assert!(matches!(err, UserApiError::ConstraintViolation(_)));

    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_overwrites_in_place() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    let id = repo
        .insert(Some("Ada"), Some("ada@example.com"))
        .await
        .unwrap();

    let affected = repo
        .update(&id.to_string(), Some("Grace"), Some("grace@example.com"))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let found = repo.find_by_id(&id.to_string()).await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.name, "Grace");
    assert_eq!(found.email, "grace@example.com");
}

#[tokio::test]
async fn test_update_missing_row_affects_nothing() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    let affected = repo
        .update("42", Some("Nobody"), Some("nobody@example.com"))
        .await
        .unwrap();
    assert_eq!(affected, 0);
}

#[tokio::test]
async fn test_delete_and_repeat_delete() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    let id = repo
        .insert(Some("Ada"), Some("ada@example.com"))
        .await
        .unwrap();
    let id = id.to_string();

    assert_eq!(repo.delete(&id).await.unwrap(), 1);
    assert!(repo.find_by_id(&id).await.unwrap().is_none());

    // Idempotent failure: the second delete affects zero rows.
    assert_eq!(repo.delete(&id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_deleted_email_can_be_reused() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.pool());

    let id = repo
        .insert(Some("Ada"), Some("ada@example.com"))
        .await
        .unwrap();
    repo.delete(&id.to_string()).await.unwrap();

    // Uniqueness holds at a point in time, not across history.
    let id2 = repo
        .insert(Some("Ada II"), Some("ada@example.com"))
        .await
        .expect("Email freed by delete must be insertable");
    assert!(id2 > id);
}

#[tokio::test]
async fn test_schema_init_is_idempotent() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    // A second application of the DDL must not fail or clear data.
    let repo = SqliteUserRepository::new(pool.clone());
    repo.insert(Some("Ada"), Some("ada@example.com"))
        .await
        .unwrap();

    pool.init_schema().await.expect("Schema reapply failed");
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}
