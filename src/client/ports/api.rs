//! Remote task API as seen by the client.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for task API calls.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// Operations the client state container issues against the task store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Returns every task in server order.
    async fn fetch_tasks(&self) -> TaskApiResult<Vec<Task>>;

    /// Creates a task and returns the stored record.
    async fn create_task(&self, draft: &NewTask) -> TaskApiResult<Task>;

    /// Applies a patch and returns the merged record.
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskApiResult<Task>;

    /// Deletes a task.
    async fn delete_task(&self, id: &TaskId) -> TaskApiResult<()>;
}

/// Failures reported by a task API.
///
/// The `Display` form is the message the client shows to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or a generic one naming the status.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl TaskApiError {
    /// Builds a status error, falling back to a generic message.
    #[must_use]
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status {
            status,
            message: message.unwrap_or_else(|| format!("HTTP error! status: {status}")),
        }
    }

    /// Returns the HTTP status for server-side rejections.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
