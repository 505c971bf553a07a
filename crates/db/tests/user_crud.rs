//! Integration tests for user repository CRUD operations.
//!
//! Exercises the full repository layer against a real database:
//! - Create / find / update / soft delete / restore lifecycle
//! - Version counter increments
//! - Unique email constraint violations
//! - Filtered, paginated listing

use sqlx::PgPool;
use userhub_db::models::user::{CreateUser, UpdateUser, UserListFilter};
use userhub_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str, role: &str) -> CreateUser {
    CreateUser {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        role: role.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("alice@example.com", "user"))
        .await
        .expect("create should succeed");

    assert_eq!(created.email, "alice@example.com");
    assert_eq!(created.role, "user");
    assert!(created.is_active);
    assert_eq!(created.version, 1);
    assert!(created.deleted_at.is_none());
    assert_eq!(created.failed_login_count, 0);

    let found = UserRepo::find_by_id(&pool, created.id)
        .await
        .expect("find should succeed")
        .expect("user must exist");
    assert_eq!(found.id, created.id);

    let by_email = UserRepo::find_by_email(&pool, "ALICE@EXAMPLE.COM")
        .await
        .expect("find by email should succeed")
        .expect("lookup must be case-insensitive");
    assert_eq!(by_email.id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com", "user"))
        .await
        .expect("first create should succeed");

    let err = UserRepo::create(&pool, &new_user("DUP@example.com", "user"))
        .await
        .expect_err("second create with same email must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_bumps_version(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("bump@example.com", "user"))
        .await
        .expect("create should succeed");
    assert_eq!(created.version, 1);

    let update = UpdateUser {
        first_name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let updated = UserRepo::update(&pool, created.id, &update)
        .await
        .expect("update should succeed")
        .expect("row must exist");

    assert_eq!(updated.first_name, "Renamed");
    // Untouched fields keep their values.
    assert_eq!(updated.last_name, "User");
    assert_eq!(updated.email, "bump@example.com");
    assert_eq!(updated.version, 2, "each update bumps version exactly once");

    let again = UserRepo::update(&pool, created.id, &UpdateUser::default())
        .await
        .expect("update should succeed")
        .expect("row must exist");
    assert_eq!(again.version, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_and_restore(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("gone@example.com", "user"))
        .await
        .expect("create should succeed");

    let deleted = UserRepo::soft_delete(&pool, created.id)
        .await
        .expect("delete should succeed");
    assert!(deleted);

    // Soft-deleted rows are invisible to normal lookups.
    let found = UserRepo::find_by_id(&pool, created.id)
        .await
        .expect("find should succeed");
    assert!(found.is_none(), "soft-deleted user must be hidden");

    let by_email = UserRepo::find_by_email(&pool, "gone@example.com")
        .await
        .expect("find should succeed");
    assert!(by_email.is_none());

    // But reachable through the any-state lookup.
    let any = UserRepo::find_by_id_any(&pool, created.id)
        .await
        .expect("find should succeed")
        .expect("row still exists");
    assert!(any.deleted_at.is_some());

    // Deleting twice is a no-op.
    let again = UserRepo::soft_delete(&pool, created.id)
        .await
        .expect("delete should succeed");
    assert!(!again, "second delete must report no rows affected");

    // Restore brings it back.
    let restored = UserRepo::restore(&pool, created.id)
        .await
        .expect("restore should succeed")
        .expect("deleted row must be restorable");
    assert!(restored.deleted_at.is_none());

    let found = UserRepo::find_by_id(&pool, created.id)
        .await
        .expect("find should succeed");
    assert!(found.is_some(), "restored user must be visible again");

    // Restoring a live row is a no-op.
    let none = UserRepo::restore(&pool, created.id)
        .await
        .expect("restore should succeed");
    assert!(none.is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters(pool: PgPool) {
    let admin = UserRepo::create(&pool, &new_user("admin@example.com", "admin"))
        .await
        .expect("create should succeed");
    let member = UserRepo::create(&pool, &new_user("member@example.com", "user"))
        .await
        .expect("create should succeed");
    let ghost = UserRepo::create(&pool, &new_user("ghost@example.com", "user"))
        .await
        .expect("create should succeed");

    // Deactivate one, soft-delete another.
    UserRepo::update(
        &pool,
        member.id,
        &UpdateUser {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .expect("update should succeed");
    UserRepo::soft_delete(&pool, ghost.id)
        .await
        .expect("delete should succeed");

    // Default filter: active, non-deleted only.
    let filter = UserListFilter::default();
    let listed = UserRepo::list(&pool, &filter, 50, 0)
        .await
        .expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, admin.id);
    assert_eq!(
        UserRepo::count(&pool, &filter).await.expect("count"),
        1,
        "count must agree with list"
    );

    // Include inactive.
    let filter = UserListFilter {
        include_inactive: true,
        ..Default::default()
    };
    assert_eq!(UserRepo::count(&pool, &filter).await.expect("count"), 2);

    // Include deleted too.
    let filter = UserListFilter {
        include_inactive: true,
        include_deleted: true,
        ..Default::default()
    };
    assert_eq!(UserRepo::count(&pool, &filter).await.expect("count"), 3);

    // Role filter.
    let filter = UserListFilter {
        role: Some("admin".to_string()),
        ..Default::default()
    };
    let listed = UserRepo::list(&pool, &filter, 50, 0)
        .await
        .expect("list should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].role, "admin");

    // Search matches email substring.
    let filter = UserListFilter {
        search: Some("admi".to_string()),
        ..Default::default()
    };
    assert_eq!(UserRepo::count(&pool, &filter).await.expect("count"), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_pagination(pool: PgPool) {
    for i in 0..5 {
        UserRepo::create(&pool, &new_user(&format!("user{i}@example.com"), "user"))
            .await
            .expect("create should succeed");
    }

    let filter = UserListFilter::default();
    let page1 = UserRepo::list(&pool, &filter, 2, 0)
        .await
        .expect("list should succeed");
    let page2 = UserRepo::list(&pool, &filter, 2, 2)
        .await
        .expect("list should succeed");
    let page3 = UserRepo::list(&pool, &filter, 2, 4)
        .await
        .expect("list should succeed");

    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 2);
    assert_eq!(page3.len(), 1);

    // No row appears on two pages.
    let mut ids: Vec<i64> = page1
        .iter()
        .chain(page2.iter())
        .chain(page3.iter())
        .map(|u| u.id)
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

// ---------------------------------------------------------------------------
// Login bookkeeping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_login_counters(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("counter@example.com", "user"))
        .await
        .expect("create should succeed");

    UserRepo::increment_failed_login(&pool, user.id)
        .await
        .expect("increment should succeed");
    UserRepo::increment_failed_login(&pool, user.id)
        .await
        .expect("increment should succeed");

    let reloaded = UserRepo::find_by_id(&pool, user.id)
        .await
        .expect("find should succeed")
        .expect("user must exist");
    assert_eq!(reloaded.failed_login_count, 2);
    assert!(reloaded.last_login_at.is_none());

    UserRepo::record_successful_login(&pool, user.id)
        .await
        .expect("record should succeed");

    let reloaded = UserRepo::find_by_id(&pool, user.id)
        .await
        .expect("find should succeed")
        .expect("user must exist");
    assert_eq!(reloaded.failed_login_count, 0);
    assert!(reloaded.locked_until.is_none());
    assert!(reloaded.last_login_at.is_some());
}
