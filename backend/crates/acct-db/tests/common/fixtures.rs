use acct_core::AccountRecord;
use acct_db::{CollectionName, DbError, DocumentCollection, Result as DbErrorResult};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

/// Creates an AccountRecord with a unique email
pub fn create_test_account(id: &str) -> AccountRecord {
    AccountRecord::new(
        id,
        format!("test-{}@example.com", Uuid::new_v4()),
        "Test",
        "User",
    )
}

/// Collection whose every call fails as if the store were unreachable
pub struct FailingCollection {
    name: CollectionName,
}

impl FailingCollection {
    pub fn new(name: CollectionName) -> Self {
        Self { name }
    }
}

#[async_trait]
impl DocumentCollection for FailingCollection {
    fn name(&self) -> &CollectionName {
        &self.name
    }

    async fn find_one(&self, _id: &str) -> DbErrorResult<Option<Value>> {
        Err(DbError::from(sqlx::Error::PoolTimedOut))
    }

    async fn replace_one(&self, _id: &str, _document: &Value) -> DbErrorResult<()> {
        Err(DbError::from(sqlx::Error::PoolClosed))
    }
}
