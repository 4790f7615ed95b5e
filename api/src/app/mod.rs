//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod random;
pub mod seed_config;
pub mod seed_service;

pub use random::RandomSource;
pub use seed_service::{SeedOutcome, SeedReport, SeedService, SeedSettings};
