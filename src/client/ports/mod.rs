//! Port contracts for the client state container.

pub mod api;

pub use api::{TaskApi, TaskApiError, TaskApiResult};
#[cfg(test)]
pub use api::MockTaskApi;
