//! Unit tests for the client state container.

mod support;
