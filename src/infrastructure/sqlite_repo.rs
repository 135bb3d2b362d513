use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Row, SqlitePool,
};

use crate::domain::{
    error::StoreError,
    repository::{StoreResult, TodoRepository},
    todo::{NewTodoItem, TodoId, TodoItem},
};

const SELECT_TODO_ITEM: &str = "SELECT id, description, creation_date, is_complete FROM TodoItem";

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Opens a pool for `database_url`, creating the database file if needed.
    ///
    /// In-memory databases live only as long as their connection, so they get a
    /// single connection that is never recycled.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> StoreResult<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, input: NewTodoItem) -> StoreResult<TodoItem> {
        let result = sqlx::query(
            "INSERT INTO TodoItem (description, creation_date, is_complete)
             VALUES (?1, ?2, ?3)",
        )
        .bind(&input.description)
        .bind(format_timestamp(&input.creation_date))
        .bind(input.is_complete)
        .execute(&self.pool)
        .await?;
        Ok(input.with_id(TodoId(result.last_insert_rowid())))
    }

    async fn read(&self, id: TodoId) -> StoreResult<Option<TodoItem>> {
        let row = sqlx::query(&format!("{SELECT_TODO_ITEM} WHERE id = ?1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_item).transpose()
    }

    async fn update(&self, item: TodoItem) -> StoreResult<TodoItem> {
        let row = sqlx::query(
            "UPDATE TodoItem SET description = ?2, is_complete = ?3 WHERE id = ?1
             RETURNING id, description, creation_date, is_complete",
        )
        .bind(item.id.0)
        .bind(&item.description)
        .bind(item.is_complete)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else { return Err(StoreError::NotFound(item.id)) };
        row_to_item(row)
    }

    async fn delete(&self, id: TodoId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM TodoItem WHERE id = ?1")
            .bind(id.0)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn get_all(&self) -> StoreResult<Vec<TodoItem>> {
        let rows = sqlx::query(&format!("{SELECT_TODO_ITEM} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(row_to_item).collect()
    }

    async fn exists(&self, id: TodoId) -> StoreResult<bool> {
        let row = sqlx::query("SELECT 1 FROM TodoItem WHERE id = ?1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn row_to_item(row: SqliteRow) -> StoreResult<TodoItem> {
    let id: i64 = row.try_get("id")?;
    let description: String = row.try_get("description")?;
    let creation_date: String = row.try_get("creation_date")?;
    let is_complete: bool = row.try_get("is_complete")?;

    let creation_date = DateTime::parse_from_rfc3339(&creation_date)
        .map_err(|e| StoreError::CorruptRow(format!("id {id}: bad creation_date {creation_date:?}: {e}")))?
        .with_timezone(&Utc);

    Ok(TodoItem { id: TodoId(id), description, creation_date, is_complete })
}
