//! Service layer for task creation, lookup, update and removal.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns `true` when the operation targeted a missing task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// The authoritative task store.
///
/// Owns a repository handle and a clock. Cloning the service is cheap and
/// every clone operates on the same collection.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns a snapshot of every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the repository fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when no task has
    /// the identifier.
    pub async fn get(&self, id: &TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()).into())
    }

    /// Creates and stores a task.
    ///
    /// A fresh identifier is generated unless the draft pins one; the
    /// creation timestamp comes from the service clock and the status
    /// defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the draft is invalid, or
    /// [`TaskRepositoryError::DuplicateTask`] (wrapped) when a pinned
    /// identifier is already in use.
    pub async fn create(&self, draft: NewTask) -> TaskServiceResult<Task> {
        let id = draft.id().cloned().unwrap_or_else(TaskId::generate);
        let task = Task::create(id, draft, &*self.clock)?;
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Merges a patch into an existing task.
    ///
    /// The merge runs against the stored record inside the repository, so
    /// concurrent updates touching different fields all take effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task is
    /// missing, or [`TaskServiceError::Domain`] when the patch is invalid.
    pub async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let clock = &*self.clock;
        let task = self
            .repository
            .update(id, Box::new(move |stored: &mut Task| stored.apply(patch, clock)))
            .await??;
        info!(task_id = %task.id(), "task updated");
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task is
    /// missing.
    pub async fn delete(&self, id: &TaskId) -> TaskServiceResult<()> {
        let removed = self.repository.remove(id).await?;
        info!(task_id = %removed.id(), "task deleted");
        Ok(())
    }

    /// Stores each draft in order, typically the demo tasks at start-up.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first creation failure.
    pub async fn seed(&self, drafts: impl IntoIterator<Item = NewTask>) -> TaskServiceResult<usize> {
        let mut count = 0;
        for draft in drafts {
            self.create(draft).await?;
            count += 1;
        }
        debug!(count, "seeded task store");
        Ok(count)
    }
}
