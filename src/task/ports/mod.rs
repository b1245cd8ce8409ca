//! Port contracts for the task store.
//!
//! Ports define infrastructure-agnostic interfaces used by the task service.

pub mod repository;

pub use repository::{TaskMutation, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
