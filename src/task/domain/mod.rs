//! Domain model for the task store.
//!
//! Tasks are plain records: an identifier, descriptive fields, a priority,
//! a due date and a workflow status, plus creation and update timestamps.
//! Infrastructure concerns stay outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod priority;
mod task;

pub use draft::{NewTask, TaskPatch};
pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use task::{Task, TaskStatus};
