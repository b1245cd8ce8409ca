//! Task API backed by an in-process task service.

use crate::client::ports::{TaskApi, TaskApiError, TaskApiResult};
use crate::http::ApiError;
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::TaskRepository,
    services::{TaskService, TaskServiceError},
};
use async_trait::async_trait;
use mockable::Clock;

/// [`TaskApi`] adapter that calls a [`TaskService`] directly.
///
/// Failures are reported with the same status codes and messages the HTTP
/// layer would produce, so the client behaves identically with either
/// adapter.
pub struct LocalTaskApi<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskService<R, C>,
}

impl<R, C> LocalTaskApi<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a task service.
    #[must_use]
    pub const fn new(service: TaskService<R, C>) -> Self {
        Self { service }
    }
}

fn rejected(err: TaskServiceError) -> TaskApiError {
    let api_error = ApiError::from(err);
    TaskApiError::status(api_error.status().as_u16(), Some(api_error.to_string()))
}

#[async_trait]
impl<R, C> TaskApi for LocalTaskApi<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    async fn fetch_tasks(&self) -> TaskApiResult<Vec<Task>> {
        self.service.list().await.map_err(rejected)
    }

    async fn create_task(&self, draft: &NewTask) -> TaskApiResult<Task> {
        self.service
            .create(draft.clone().without_id())
            .await
            .map_err(rejected)
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskApiResult<Task> {
        self.service
            .update(id, patch.clone())
            .await
            .map_err(rejected)
    }

    async fn delete_task(&self, id: &TaskId) -> TaskApiResult<()> {
        self.service.delete(id).await.map_err(rejected)
    }
}
