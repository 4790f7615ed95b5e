//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! `save` persists every part of an aggregate that has no identity yet,
//! assigns identities and back-references, and returns the aggregate.
//! Parts that already carry an identity are left untouched.

use async_trait::async_trait;

use crate::domain::entities::{Contest, Note, Question, TechInterview};
use crate::error::DomainError;

/// Repository for TechInterview entities
#[async_trait]
pub trait TechInterviewRepository: Send + Sync {
    /// List every tech interview question
    async fn find_all(&self) -> Result<Vec<TechInterview>, DomainError>;

    /// Persist a tech interview question
    async fn save(&self, tech_interview: TechInterview) -> Result<TechInterview, DomainError>;
}

/// Repository for Question aggregates (participants and comments included)
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// List every question with its participants and comments
    async fn find_all(&self) -> Result<Vec<Question>, DomainError>;

    /// Persist a question and its new participants and comments
    async fn save(&self, question: Question) -> Result<Question, DomainError>;
}

/// Repository for Contest aggregates (participants, problems and answers included)
#[async_trait]
pub trait ContestRepository: Send + Sync {
    /// List every contest with its children
    async fn find_all(&self) -> Result<Vec<Contest>, DomainError>;

    /// List the contests of one space with their children
    async fn find_by_space(&self, space_id: i64) -> Result<Vec<Contest>, DomainError>;

    /// Persist a contest and its new participants, problems and answers
    async fn save(&self, contest: Contest) -> Result<Contest, DomainError>;
}

/// Repository for Note documents
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List every note
    async fn find_all(&self) -> Result<Vec<Note>, DomainError>;

    /// Persist a note
    async fn save(&self, note: Note) -> Result<Note, DomainError>;
}
