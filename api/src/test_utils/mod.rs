//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks record every call so tests can assert on what reached the
//! external systems, not only on what came back.

pub mod fixtures;
pub mod mocks;
pub mod server;

pub use fixtures::*;
pub use mocks::*;
pub use server::*;
