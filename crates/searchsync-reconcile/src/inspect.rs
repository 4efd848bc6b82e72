use serde_json::Value;

use crate::admin::IndexAdmin;
use crate::error::SyncResult;

/// Every search index on `collection` with its full definition.
///
/// Read-only. Unlike reconciliation, a listing failure is returned to the
/// caller.
pub async fn inspect<A: IndexAdmin + ?Sized>(
    admin: &A,
    collection: &str,
) -> SyncResult<Vec<Value>> {
    let indexes = admin.list_indexes(collection).await?;
    log::info!("Found {} search indexes on '{}'", indexes.len(), collection);
    Ok(indexes)
}
