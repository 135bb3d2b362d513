use axum::{routing::get, Router};

use crate::domain::repository::TodoRepository;
use crate::http::routes::todos::{self, AppState};

/// Health check plus the todo routes over `repo`.
pub fn app<R: TodoRepository + Clone>(repo: R) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(todos::router(AppState { repo }))
}
