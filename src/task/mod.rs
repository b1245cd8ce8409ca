//! Task store for Taskboard.
//!
//! Holds the authoritative collection of task records and exposes list,
//! lookup, create, update and delete operations keyed by task identifier.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod tests;
