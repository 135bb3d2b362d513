use thiserror::Error;

use super::todo::TodoId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo item {0} not found")]
    NotFound(TodoId),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("corrupt todo row: {0}")]
    CorruptRow(String),
}
