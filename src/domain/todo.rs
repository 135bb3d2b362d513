use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.0.fmt(f) }
}

/// A persisted todo item. `id` and `creation_date` are assigned by the store
/// and never rewritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub is_complete: bool,
}

/// An item that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub is_complete: bool,
}

impl NewTodoItem {
    /// Stamps the item with the current time and marks it incomplete.
    pub fn now(description: impl Into<String>) -> Self {
        Self { description: description.into(), creation_date: Utc::now(), is_complete: false }
    }

    pub fn with_id(self, id: TodoId) -> TodoItem {
        TodoItem { id, description: self.description, creation_date: self.creation_date, is_complete: self.is_complete }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoItem {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoItem {
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl TodoItem {
    /// Applies the mutable fields of an update, leaving id and creation date alone.
    pub fn apply(&mut self, input: UpdateTodoItem) {
        self.description = input.description;
        self.is_complete = input.is_complete;
    }
}
