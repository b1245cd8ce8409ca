//! Error responses for the HTTP layer.

use crate::task::{ports::TaskRepositoryError, services::TaskServiceError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// JSON body carrying a human-readable message.
///
/// Used for every error response and for delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// The message text.
    pub message: String,
}

impl MessageBody {
    /// Creates a message body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed task does not exist.
    #[error("Task not found")]
    NotFound,

    /// The path matched no resource.
    #[error("Not found")]
    UnknownRoute,

    /// The request body could not be used.
    #[error("Invalid task payload: {0}")]
    InvalidPayload(String),

    /// The task identifier is already taken.
    #[error("Task already exists")]
    Conflict,

    /// The resource does not support the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Anything else. Details are logged, never returned.
    #[error("Internal server error")]
    Internal(#[source] TaskServiceError),
}

impl ApiError {
    /// Returns the status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::UnknownRoute => StatusCode::NOT_FOUND,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(domain) => Self::InvalidPayload(domain.to_string()),
            TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => Self::NotFound,
            TaskServiceError::Repository(TaskRepositoryError::DuplicateTask(_)) => Self::Conflict,
            other @ TaskServiceError::Repository(TaskRepositoryError::Persistence(_)) => {
                Self::Internal(other)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(source) => error!(error = %source, "request failed"),
            Self::InvalidPayload(reason) => warn!(%reason, "rejected request body"),
            _ => {}
        }
        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}
