//! Application services for the client side.

mod container;

pub use container::{TaskClient, UpdateOutcome};
