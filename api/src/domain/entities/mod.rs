//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.
//!
//! Identifiers are assigned by the store on save; an entity whose `id` is
//! `None` has not been persisted yet.

/// Declares a UUID-backed identifier newtype.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub struct $name(pub ::uuid::Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod contest;
pub mod note;
pub mod question;
pub mod tech_interview;

pub use contest::{
    Answer, AnswerId, Contest, ContestId, ContestParticipant, ContestParticipantId, Problem,
    ProblemId, Submit,
};
pub use note::{Author, Note, NoteId};
pub use question::{Comment, CommentId, ParticipantQna, ParticipantQnaId, Question, QuestionId};
pub use tech_interview::{TechClass, TechInterview, TechInterviewId};
