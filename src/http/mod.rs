//! HTTP resource layer for the task store.
//!
//! Two resources are exposed: the collection at `/tasks` and single tasks at
//! `/tasks/{id}`. Handlers are stateless; they translate verbs into
//! [`TaskService`](crate::task::services::TaskService) calls and map the
//! outcome to a status code with a JSON body. Every error body has the shape
//! `{"message": "..."}`.

mod error;
mod handlers;
mod routes;

pub use error::{ApiError, MessageBody};
pub use routes::{router, serve};
