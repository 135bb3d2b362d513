use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;

use crate::domain::{
    repository::TodoRepository,
    todo::{CreateTodoItem, NewTodoItem, TodoId, TodoItem, UpdateTodoItem},
};
use crate::http::types::ApiError;

#[derive(Clone)]
pub struct AppState<R: TodoRepository> { pub repo: R }

pub fn router<R: TodoRepository + Clone>(state: AppState<R>) -> Router {
    Router::new()
        .route("/todo", post(create_todo::<R>).get(get_all_todos::<R>))
        .route("/todo/:id", get(read_todo::<R>).put(update_todo::<R>).delete(delete_todo::<R>))
        .with_state(state)
}

/// Whatever the body says, the server stamps the creation time and starts the
/// item out incomplete.
async fn create_todo<R: TodoRepository + Clone>(State(state): State<AppState<R>>, Json(payload): Json<CreateTodoItem>) -> Result<Json<TodoItem>, ApiError> {
    tracing::info!("creating todo item");
    let item = state.repo.create(NewTodoItem::now(payload.description)).await?;
    tracing::info!(id = %item.id, "todo item created");
    Ok(Json(item))
}

async fn read_todo<R: TodoRepository + Clone>(State(state): State<AppState<R>>, Path(id): Path<TodoId>) -> Result<Json<TodoItem>, ApiError> {
    tracing::info!(%id, "reading todo item");
    let Some(item) = state.repo.read(id).await? else { return Err(ApiError::not_found(id)) };
    tracing::info!(%id, "todo item read");
    Ok(Json(item))
}

async fn update_todo<R: TodoRepository + Clone>(State(state): State<AppState<R>>, Path(id): Path<TodoId>, Json(payload): Json<UpdateTodoItem>) -> Result<StatusCode, ApiError> {
    tracing::info!(%id, "updating todo item");
    if !state.repo.exists(id).await? {
        return Err(ApiError::not_found(id));
    }
    // The row can vanish between the existence check and here.
    let Some(mut item) = state.repo.read(id).await? else { return Err(ApiError::not_found(id)) };
    item.apply(payload);
    state.repo.update(item).await?;
    tracing::info!(%id, "todo item updated");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo<R: TodoRepository + Clone>(State(state): State<AppState<R>>, Path(id): Path<TodoId>) -> Result<StatusCode, ApiError> {
    tracing::info!(%id, "deleting todo item");
    if !state.repo.exists(id).await? {
        return Err(ApiError::not_found(id));
    }
    state.repo.delete(id).await?;
    tracing::info!(%id, "todo item deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn get_all_todos<R: TodoRepository + Clone>(State(state): State<AppState<R>>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    tracing::info!("listing todo items");
    let items = state.repo.get_all().await?;
    tracing::info!(count = items.len(), "todo items listed");
    Ok(Json(items))
}
