//! SeaORM entity definitions
//!
//! Row-level models for each table. Domain types live in `domain::entities`;
//! adapters convert between the two.

pub mod answers;
pub mod comments;
pub mod contest_participants;
pub mod contests;
pub mod notes;
pub mod participant_qnas;
pub mod problems;
pub mod questions;
pub mod tech_interviews;
