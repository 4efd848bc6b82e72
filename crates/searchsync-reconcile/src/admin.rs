use async_trait::async_trait;
use serde_json::Value;

use searchsync_core::IndexDefinition;

use crate::error::SyncResult;

/// The search-index admin operations the reconciler needs from a database.
///
/// Create, update and drop are fire-and-forget: implementations return once
/// the server has accepted the command, not once the index is built.
#[async_trait]
pub trait IndexAdmin: Send + Sync {
    /// Every search index on `collection`, as `{name, ...definition}` JSON.
    async fn list_indexes(&self, collection: &str) -> SyncResult<Vec<Value>>;

    async fn create_index(
        &self,
        collection: &str,
        name: &str,
        definition: &IndexDefinition,
    ) -> SyncResult<()>;

    async fn update_index(
        &self,
        collection: &str,
        name: &str,
        definition: &IndexDefinition,
    ) -> SyncResult<()>;

    async fn drop_index(&self, collection: &str, name: &str) -> SyncResult<()>;

    /// Names of the search indexes on `collection`.
    ///
    /// Entries without a string `name` field are skipped.
    async fn list_index_names(&self, collection: &str) -> SyncResult<Vec<String>> {
        let indexes = self.list_indexes(collection).await?;
        Ok(indexes
            .iter()
            .filter_map(|index| index.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect())
    }
}
