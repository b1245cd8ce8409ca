//! Request handlers for the task resources.

use super::{ApiError, MessageBody};
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::TaskRepository,
    services::TaskService,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{Method, StatusCode, Uri},
};
use mockable::Clock;
use tracing::debug;

/// `GET /tasks`
pub(super) async fn list_tasks<R, C>(
    State(service): State<TaskService<R, C>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = service.list().await?;
    debug!(count = tasks.len(), "listing tasks");
    Ok(Json(tasks))
}

/// `POST /tasks`
///
/// The server always assigns the identifier; an `id` in the body is ignored.
pub(super) async fn create_task<R, C>(
    State(service): State<TaskService<R, C>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(draft) = payload?;
    let task = service.create(draft.without_id()).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /tasks/{id}`
pub(super) async fn get_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = service.get(&TaskId::new(id)).await?;
    Ok(Json(task))
}

/// `PUT /tasks/{id}`
///
/// A missing task is reported as not found whatever the body holds; body
/// problems are only reported for tasks that exist.
pub(super) async fn update_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = TaskId::new(id);
    let patch = match payload {
        Ok(Json(patch)) => patch,
        Err(rejection) => {
            service.get(&id).await?;
            return Err(rejection.into());
        }
    };
    let task = service.update(&id, patch).await?;
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
pub(super) async fn delete_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service.delete(&TaskId::new(id)).await?;
    Ok(Json(MessageBody::new("Task deleted successfully")))
}

/// Any verb a resource does not route.
pub(super) async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    debug!(%method, %uri, "method not allowed");
    ApiError::MethodNotAllowed
}

/// Any path outside the task resources.
pub(super) async fn unknown_route(uri: Uri) -> ApiError {
    debug!(%uri, "no such route");
    ApiError::UnknownRoute
}
