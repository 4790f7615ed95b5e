//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contests;

pub use contests::list_contests;
