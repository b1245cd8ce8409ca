//! Adapter implementations for the task API port.

mod http;
mod local;

pub use http::HttpTaskApi;
pub use local::LocalTaskApi;
