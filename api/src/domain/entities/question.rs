//! Question domain entity
//!
//! A Q&A thread about one tech interview question. The thread owns its
//! participants and the comments they leave.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::tech_interview::TechInterviewId;
use crate::error::DomainError;

entity_id!(
    /// Unique identifier for a question thread
    QuestionId
);

entity_id!(
    /// Unique identifier for a thread participant
    ParticipantQnaId
);

entity_id!(
    /// Unique identifier for a comment
    CommentId
);

/// A member taking part in a question thread
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantQna {
    pub id: Option<ParticipantQnaId>,
    pub question_id: Option<QuestionId>,
    pub member_id: i64,
    pub nickname: String,
}

/// A comment left by a participant of the same thread
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: Option<CommentId>,
    pub question_id: Option<QuestionId>,
    pub participant_id: ParticipantQnaId,
    pub comment: String,
}

/// A question thread with its participants and comments
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: Option<QuestionId>,
    pub space_id: i64,
    pub author_id: i64,
    pub author_nickname: String,
    pub tech_interview_id: TechInterviewId,
    pub participants: Vec<ParticipantQna>,
    pub comments: Vec<Comment>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn new(
        space_id: i64,
        author_id: i64,
        author_nickname: impl Into<String>,
        tech_interview_id: TechInterviewId,
    ) -> Self {
        Self {
            id: None,
            space_id,
            author_id,
            author_nickname: author_nickname.into(),
            tech_interview_id,
            participants: Vec::new(),
            comments: Vec::new(),
            created_at: None,
        }
    }

    /// Attach a new, not yet persisted participant
    pub fn add_participant(&mut self, member_id: i64, nickname: impl Into<String>) {
        self.participants.push(ParticipantQna {
            id: None,
            question_id: self.id,
            member_id,
            nickname: nickname.into(),
        });
    }

    /// Attach a comment written by one of this thread's persisted participants
    pub fn add_comment(
        &mut self,
        participant_id: ParticipantQnaId,
        comment: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.participant(&participant_id).is_none() {
            return Err(DomainError::Validation(format!(
                "Participant {} does not belong to this question",
                participant_id
            )));
        }

        self.comments.push(Comment {
            id: None,
            question_id: self.id,
            participant_id,
            comment: comment.into(),
        });
        Ok(())
    }

    pub fn participant(&self, id: &ParticipantQnaId) -> Option<&ParticipantQna> {
        self.participants.iter().find(|p| p.id.as_ref() == Some(id))
    }

    /// Identities of participants that have been persisted, in order
    pub fn participant_ids(&self) -> Vec<ParticipantQnaId> {
        self.participants.iter().filter_map(|p| p.id).collect()
    }
}
