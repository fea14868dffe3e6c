use crate::{
    CollectionName, ConnectionManager, DbError, DocumentCollection, Result as DbErrorResult,
};

use acct_core::{AccountRecord, ErrorLocation};

use std::panic::Location;
use std::sync::Arc;

use log::debug;

/// Account records in a single collection, keyed by account id
pub struct UserRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl UserRepository {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    /// Repository over the named collection of `manager`'s database
    pub async fn open(manager: &ConnectionManager, name: &CollectionName) -> DbErrorResult<Self> {
        let collection = manager.collection(name).await?;
        Ok(Self::new(Arc::new(collection)))
    }

    pub async fn fetch_user_by_id(&self, id: &str) -> DbErrorResult<AccountRecord> {
        debug!("Fetching user {id} from {}", self.collection.name());

        let document =
            self.collection
                .find_one(id)
                .await?
                .ok_or_else(|| DbError::NotFound {
                    id: id.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(serde_json::from_value(document)?)
    }

    /// Store `record` under `record.id`, replacing every field of any
    /// existing document.
    pub async fn upsert_user_by_id(&self, record: &AccountRecord) -> DbErrorResult<()> {
        debug!("Upserting user {} into {}", record.id, self.collection.name());

        let document = serde_json::to_value(record)?;
        self.collection.replace_one(&record.id, &document).await
    }
}
