use acct_db::{CollectionName, SqliteCollection};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

pub fn user_info() -> CollectionName {
    CollectionName::new("user", "info").expect("valid collection name")
}

/// Opens the `user/info` collection on a fresh in-memory database
pub async fn create_test_collection() -> SqliteCollection {
    let pool = create_test_pool().await;

    SqliteCollection::open(pool, user_info())
        .await
        .expect("Failed to open test collection")
}
