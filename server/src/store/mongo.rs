use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind},
    Client, Collection,
};
use serde::{Deserialize, Serialize};

use super::{StoreError, TodoStore};
use crate::model::{Todo, TodoId};

const DATABASE_NAME: &str = "golang_db";
const COLLECTION_NAME: &str = "todos";

/// Shape of a todo inside the collection.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    body: String,
}

impl From<TodoDocument> for Todo {
    fn from(document: TodoDocument) -> Self {
        Todo {
            id: document.id.map(TodoId::from),
            completed: document.completed,
            body: document.body,
        }
    }
}

/// MongoDB-backed store.
///
/// Holds one `Client` for the life of the process. The driver pools
/// connections internally, so clones share the same pool.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<TodoDocument>,
}

impl MongoStore {
    /// Connects and pings, so an unreachable server fails here rather than
    /// on the first request.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let store = Self::from_client(client);
        store.ping().await?;
        Ok(store)
    }

    pub fn from_client(client: Client) -> Self {
        let collection = client
            .database(DATABASE_NAME)
            .collection::<TodoDocument>(COLLECTION_NAME);
        Self { client, collection }
    }

    /// Round-trips a `ping` command to check the server is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database(DATABASE_NAME)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(format!("ping failed: {e}")))?;
        Ok(())
    }

    /// Closes pooled connections and stops the driver's background tasks.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

fn query_error(err: MongoError) -> StoreError {
    match *err.kind {
        ErrorKind::BsonDeserialization(_) => StoreError::Decode(err.to_string()),
        _ => StoreError::Query(err.to_string()),
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(query_error)?;
        let documents: Vec<TodoDocument> = cursor.try_collect().await.map_err(query_error)?;
        tracing::debug!(count = documents.len(), "fetched todos");
        Ok(documents.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, body: String) -> Result<Todo, StoreError> {
        let document = TodoDocument {
            id: None,
            completed: false,
            body,
        };
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(query_error)?;

        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))?;
        tracing::debug!(id = %oid, "inserted todo");

        Ok(Todo {
            id: Some(oid.into()),
            completed: document.completed,
            body: document.body,
        })
    }

    async fn mark_completed(&self, id: TodoId) -> Result<u64, StoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id.object_id() },
                doc! { "$set": { "completed": true } },
            )
            .await
            .map_err(query_error)?;
        Ok(result.matched_count)
    }

    async fn delete(&self, id: TodoId) -> Result<u64, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() })
            .await
            .map_err(query_error)?;
        Ok(result.deleted_count)
    }
}
