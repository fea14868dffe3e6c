use crate::{CollectionName, Result as DbErrorResult};

use async_trait::async_trait;
use serde_json::Value;

/// Handle to a set of JSON documents keyed by `id`.
///
/// Each call is one independent request against the store; implementations
/// add no transactions or retries.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    fn name(&self) -> &CollectionName;

    /// Document whose id matches exactly, if any
    async fn find_one(&self, id: &str) -> DbErrorResult<Option<Value>>;

    /// Replace the whole document stored under `id`, inserting it if absent
    async fn replace_one(&self, id: &str, document: &Value) -> DbErrorResult<()>;
}
