use async_trait::async_trait;

use super::error::StoreError;
use super::todo::{NewTodoItem, TodoId, TodoItem};

pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed storage of todo items. Handlers talk to this trait directly; the
/// SQLite and in-memory stores both implement it.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Prepares the backing store. Safe to call more than once.
    async fn init(&self) -> StoreResult<()>;

    /// Stores a new item and returns it with its assigned id.
    async fn create(&self, input: NewTodoItem) -> StoreResult<TodoItem>;

    /// Absence is `Ok(None)`, never an error.
    async fn read(&self, id: TodoId) -> StoreResult<Option<TodoItem>>;

    /// Overwrites description and completion of the stored row with `item.id`.
    /// Fails with [`StoreError::NotFound`] when that row does not exist.
    async fn update(&self, item: TodoItem) -> StoreResult<TodoItem>;

    /// Fails with [`StoreError::NotFound`] when the row does not exist.
    async fn delete(&self, id: TodoId) -> StoreResult<()>;

    /// All items in id order.
    async fn get_all(&self) -> StoreResult<Vec<TodoItem>>;

    async fn exists(&self, id: TodoId) -> StoreResult<bool>;
}
