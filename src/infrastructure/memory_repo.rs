use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    error::StoreError,
    repository::{StoreResult, TodoRepository},
    todo::{NewTodoItem, TodoId, TodoItem},
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<TodoId, TodoItem>,
    last_id: i64,
}

/// Process-local store. Ids come from a counter that only moves forward, so
/// deleted ids are never handed out again.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn init(&self) -> StoreResult<()> { Ok(()) }

    async fn create(&self, input: NewTodoItem) -> StoreResult<TodoItem> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let item = input.with_id(TodoId(table.last_id));
        table.rows.insert(item.id, item.clone());
        Ok(item)
    }

    async fn read(&self, id: TodoId) -> StoreResult<Option<TodoItem>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, item: TodoItem) -> StoreResult<TodoItem> {
        let mut table = self.table.write().await;
        let Some(stored) = table.rows.get_mut(&item.id) else { return Err(StoreError::NotFound(item.id)) };
        stored.description = item.description;
        stored.is_complete = item.is_complete;
        Ok(stored.clone())
    }

    async fn delete(&self, id: TodoId) -> StoreResult<()> {
        match self.table.write().await.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn get_all(&self) -> StoreResult<Vec<TodoItem>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn exists(&self, id: TodoId) -> StoreResult<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }
}
