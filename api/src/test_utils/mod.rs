//! Test utilities
//!
//! In-memory repositories and test fixtures for unit testing.
//! The repositories assign identities and back-references on save the same
//! way the PostgreSQL adapters do.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
