use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{error::StoreError, todo::TodoId};

/// Body of every 500. Details stay in the log.
pub const STORAGE_FAILURE_MESSAGE: &str = "internal storage error";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody { pub message: String }

/// Everything a todo handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo item {0} not found")]
    NotFound(TodoId),
    #[error(transparent)]
    Store(StoreError),
}

impl ApiError {
    /// Logs the failed lookup and builds the 404.
    pub fn not_found(id: TodoId) -> Self {
        tracing::error!(%id, "todo item not found");
        Self::NotFound(id)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::not_found(id),
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            Self::Store(err) => {
                tracing::error!(error = %err, "storage failure");
                let body = ErrorBody { message: STORAGE_FAILURE_MESSAGE.to_string() };
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
