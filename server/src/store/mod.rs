//! Persistence seam for todos.
//!
//! Handlers only see [`TodoStore`]. The binary wires in [`MongoStore`];
//! tests and local runs without a database use [`MemoryStore`].

mod memory;
mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Todo, TodoId};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("failed to decode document: {0}")]
    Decode(String),

    #[error("store returned a non-ObjectId inserted id: {0}")]
    UnexpectedId(String),
}

/// Single-document operations over the `todos` collection.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every todo, in the store's native order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Inserts `{completed: false, body}` and returns it with its new id.
    async fn insert(&self, body: String) -> Result<Todo, StoreError>;

    /// Sets `completed = true`. Returns how many documents matched.
    async fn mark_completed(&self, id: TodoId) -> Result<u64, StoreError>;

    /// Returns how many documents were deleted.
    async fn delete(&self, id: TodoId) -> Result<u64, StoreError>;
}

pub type SharedStore = Arc<dyn TodoStore>;
