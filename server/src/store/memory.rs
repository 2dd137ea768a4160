use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::model::{Todo, TodoId};

/// In-process store. Keeps insertion order, which stands in for the
/// natural order of a MongoDB collection scan.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn insert(&self, body: String) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: Some(TodoId::new()),
            completed: false,
            body,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn mark_completed(&self, id: TodoId) -> Result<u64, StoreError> {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|todo| todo.id == Some(id)) {
            Some(todo) => {
                todo.completed = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<u64, StoreError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|todo| todo.id != Some(id));
        Ok((before - todos.len()) as u64)
    }
}
