//! Client state container for Taskboard.
//!
//! A presentation layer drives the container through four intents (fetch,
//! add, update, delete) and observes the resulting [`ClientState`]: the task
//! list in server order, a loading flag and the latest error message. The
//! module follows the same layout as [`crate::task`]:
//!
//! - State, reducer, form validation and view selectors at the top level
//! - The remote API contract in [`ports`]
//! - HTTP and in-process implementations in [`adapters`]
//! - The container itself in [`services`]

pub mod adapters;
pub mod ports;
pub mod services;

mod form;
mod state;
mod view;

pub use form::{FieldError, FormField, TaskForm, ValidationError};
pub use state::{ClientState, IntentKind, IntentPhase, IntentPhases, TaskAction};
pub use view::{BoardColumn, TaskFilter};

#[cfg(test)]
mod tests;
