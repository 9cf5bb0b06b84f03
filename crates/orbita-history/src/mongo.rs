use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use orbita_agent::Turn;

use crate::document::ThreadDocument;
use crate::error::{Result, StorageError};
use crate::store::HistoryStore;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// MongoDB-backed history store
///
/// One document per thread in a single collection, `_id` = thread id.
#[derive(Clone)]
pub struct MongoHistoryStore {
    collection: Collection<ThreadDocument>,
}

impl MongoHistoryStore {
    /// Connect to MongoDB and bind the thread collection
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let collection = client.database(database).collection(collection);

        Ok(Self { collection })
    }
}

#[async_trait]
impl HistoryStore for MongoHistoryStore {
    async fn load(&self, thread_id: &str) -> Result<Vec<Turn>> {
        let filter = doc! { "_id": thread_id };
        let document = self.collection.find_one(filter).await?;
        Ok(document.map(|d| d.messages).unwrap_or_default())
    }

    async fn save(&self, thread_id: &str, user_id: &str, turns: &[Turn]) -> Result<()> {
        let document = ThreadDocument {
            thread_id: thread_id.to_string(),
            user_id: user_id.to_string(),
            messages: turns.to_vec(),
            updated_at: Utc::now(),
        };

        let filter = doc! { "_id": thread_id };
        self.collection
            .replace_one(filter, &document)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn delete(&self, thread_id: &str) -> Result<()> {
        let filter = doc! { "_id": thread_id };
        // deleted_count == 0 (unknown thread) is still success
        self.collection.delete_one(filter).await?;
        Ok(())
    }
}
