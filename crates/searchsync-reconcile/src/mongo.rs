//! [`IndexAdmin`] over the MongoDB search-index commands.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document};
use mongodb::{Client, Collection, Database, SearchIndexModel};
use serde_json::Value;

use searchsync_core::IndexDefinition;

use crate::admin::IndexAdmin;
use crate::error::{SyncError, SyncResult};

/// A connected MongoDB database.
///
/// Holds the single client for the whole run; call [`shutdown`] when done.
///
/// [`shutdown`]: MongoIndexAdmin::shutdown
#[derive(Debug, Clone)]
pub struct MongoIndexAdmin {
    client: Client,
    database: Database,
}

impl MongoIndexAdmin {
    /// Connect to `uri` and select `database`.
    pub async fn connect(uri: &str, database: &str) -> SyncResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);
        log::info!("Connected to MongoDB database '{}'", database.name());

        Ok(Self { client, database })
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Release the client and its connection pool.
    pub async fn shutdown(self) {
        log::debug!("Shutting down MongoDB client");
        self.client.shutdown().await;
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

/// Convert an opaque JSON definition into the BSON document the driver sends.
fn to_document(name: &str, definition: &IndexDefinition) -> SyncResult<Document> {
    bson::to_document(definition.as_value()).map_err(|e| SyncError::Conversion {
        index: name.to_string(),
        message: e.to_string(),
    })
}

/// Attach the collection to a failed admin command.
fn admin_error(collection: &str, e: mongodb::error::Error) -> SyncError {
    SyncError::Admin {
        collection: collection.to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl IndexAdmin for MongoIndexAdmin {
    async fn list_indexes(&self, collection: &str) -> SyncResult<Vec<Value>> {
        log::debug!("Listing search indexes on '{}'", collection);
        let cursor = self
            .collection(collection)
            .list_search_indexes()
            .await
            .map_err(|e| admin_error(collection, e))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| admin_error(collection, e))?;

        Ok(documents
            .into_iter()
            .map(|doc| Bson::Document(doc).into_relaxed_extjson())
            .collect())
    }

    async fn create_index(
        &self,
        collection: &str,
        name: &str,
        definition: &IndexDefinition,
    ) -> SyncResult<()> {
        let model = SearchIndexModel::builder()
            .definition(to_document(name, definition)?)
            .name(name.to_string())
            .build();

        let created = self
            .collection(collection)
            .create_search_index(model)
            .await
            .map_err(|e| admin_error(collection, e))?;
        log::debug!("Server accepted search index '{}' on '{}'", created, collection);
        Ok(())
    }

    async fn update_index(
        &self,
        collection: &str,
        name: &str,
        definition: &IndexDefinition,
    ) -> SyncResult<()> {
        let document = to_document(name, definition)?;
        self.collection(collection)
            .update_search_index(name, document)
            .await
            .map_err(|e| admin_error(collection, e))?;
        log::debug!("Server accepted update of '{}' on '{}'", name, collection);
        Ok(())
    }

    async fn drop_index(&self, collection: &str, name: &str) -> SyncResult<()> {
        self.collection(collection)
            .drop_search_index(name)
            .await
            .map_err(|e| admin_error(collection, e))?;
        log::debug!("Server accepted drop of '{}' on '{}'", name, collection);
        Ok(())
    }
}
