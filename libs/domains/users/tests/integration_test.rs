//! Integration tests for Users domain
//!
//! These run the Postgres repository against a real database started with
//! testcontainers, so the table's constraints are the ones being exercised.
//! Docker is required; run with `cargo test -- --ignored`.

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_find_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("save_and_find");

    let user = User::new(
        builder.id(1),
        builder.name("first", "main"),
        builder.name("last", "main"),
        builder.email("main"),
    );

    let saved = repo.save(user.clone()).await.unwrap();
    assert_eq!(saved, user);

    let found = repo.find_by_id(user.id).await.unwrap();
    let found = assert_some(found, "user should exist");
    assert_id_eq(found.id, user.id, "found user id");
    assert_eq!(found.email, user.email);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_same_id_replaces() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("save_replaces");
    let id = builder.id(1);

    repo.save(User::new(id, "Thabo", "Pebane", builder.email("old")))
        .await
        .unwrap();
    repo.save(User::new(id, "Thabo", "Mokoena", builder.email("new")))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].last_name, "Mokoena");
    assert_eq!(all[0].email, builder.email("new"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_email_is_storage_error() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("duplicate_email");
    let email = builder.email("shared");

    repo.save(User::new(builder.id(1), "", "", email.clone()))
        .await
        .unwrap();
    let result = repo.save(User::new(builder.id(2), "", "", email)).await;

    assert!(matches!(result, Err(UserError::Storage(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_over_long_email_is_storage_error() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let email = format!("{}@example.com", "a".repeat(EMAIL_MAX_LENGTH));

    let result = repo.save(User::new(1, "", "", email)).await;

    assert!(matches!(result, Err(UserError::Storage(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_ordered_and_delete() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    for id in [3, 1, 2] {
        repo.save(User::new(id, "", "", format!("user{}@example.com", id)))
            .await
            .unwrap();
    }

    let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    repo.delete_by_id(2).await.unwrap();
    repo.delete_by_id(2).await.unwrap();
    assert_eq!(repo.find_by_id(2).await.unwrap(), None);

    db.truncate_users().await;
    assert!(repo.find_all().await.unwrap().is_empty());
}
