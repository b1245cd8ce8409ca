//! In-memory task repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskMutation, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same backing collection, so a repository handed to
/// several request handlers observes every mutation immediately.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, Vec<Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, Vec<Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn position_of(tasks: &[Task], id: &TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        if position_of(&tasks, task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
        }
        tasks.push(task.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &TaskId,
        mutation: TaskMutation<'_>,
    ) -> TaskRepositoryResult<Result<Task, TaskDomainError>> {
        let mut tasks = self.write()?;
        let slot = tasks
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        let mut changed = slot.clone();
        if let Err(rejection) = mutation(&mut changed) {
            return Ok(Err(rejection));
        }
        *slot = changed.clone();
        Ok(Ok(changed))
    }

    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let mut tasks = self.write()?;
        let index =
            position_of(&tasks, id).ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        Ok(tasks.remove(index))
    }
}
