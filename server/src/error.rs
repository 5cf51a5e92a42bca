use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use zoo_model::CriteriaError;
use zoo_storage::StorageError;

use crate::INVALID_ANIMAL_MESSAGE;

/// Errors surfaced by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submitted animal failed validation.
    #[error("animal is not properly formatted")]
    InvalidAnimal,

    /// The query string carried a malformed criterion.
    #[error(transparent)]
    InvalidCriteria(#[from] CriteriaError),

    /// No animal with the requested id.
    #[error("animal not found")]
    NotFound,

    /// The store could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A blocking store task panicked or was cancelled.
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidAnimal => (StatusCode::BAD_REQUEST, INVALID_ANIMAL_MESSAGE).into_response(),
            Self::InvalidCriteria(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Storage(_) | Self::Task(_) => {
                error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
