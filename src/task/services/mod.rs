//! Application services for the task store.

mod lifecycle;
mod seed;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use seed::default_tasks;
