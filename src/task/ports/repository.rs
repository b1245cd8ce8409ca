//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskDomainError, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Change applied to a stored task while the repository holds it exclusively.
pub type TaskMutation<'a> = Box<dyn FnOnce(&mut Task) -> Result<(), TaskDomainError> + Send + 'a>;

/// Task persistence contract.
///
/// Implementations keep tasks in insertion order; [`TaskRepository::list`]
/// returns them in that order.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns a snapshot of every stored task.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Appends a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier is
    /// already taken.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Reads, mutates and writes back one task as a single step, keeping its
    /// position.
    ///
    /// No other mutation of the same task can interleave with `mutation`.
    /// When `mutation` rejects the change the stored task is left untouched
    /// and the rejection is returned as the inner error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(
        &self,
        id: &TaskId,
        mutation: TaskMutation<'_>,
    ) -> TaskRepositoryResult<Result<Task, TaskDomainError>>;

    /// Removes a task and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
