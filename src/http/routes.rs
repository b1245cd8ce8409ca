//! Router assembly and the server loop.

use super::handlers::{
    create_task, delete_task, get_task, list_tasks, method_not_allowed, unknown_route,
    update_task,
};
use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{Router, routing::get};
use mockable::Clock;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Builds the router for the task resources around a shared service.
pub fn router<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            get(list_tasks::<R, C>)
                .post(create_task::<R, C>)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/{id}",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>)
                .fallback(method_not_allowed),
        )
        .fallback(unknown_route)
        .with_state(service)
}

/// Serves the task resources on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve<R, C>(
    listener: TcpListener,
    service: TaskService<R, C>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "task API listening");
    }
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}
