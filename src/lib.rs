//! Taskboard: a single-user task manager.
//!
//! This crate provides an in-memory task store, the REST resources that
//! expose it, and a client-side state container that presentation layers
//! drive through asynchronous intents.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task records and validation with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for storage and the remote API
//! - **Adapters**: Concrete implementations of ports (in-memory, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task records and the authoritative store
//! - [`http`]: `/tasks` and `/tasks/{id}` resources
//! - [`client`]: Client state container with fetch/add/update/delete intents
//! - [`config`]: Command-line and environment configuration
//! - [`telemetry`]: Logging bootstrap

pub mod client;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
