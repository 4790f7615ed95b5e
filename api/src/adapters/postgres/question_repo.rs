//! PostgreSQL adapter for QuestionRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::insert_batched;
use crate::domain::entities::{
    Comment, CommentId, ParticipantQna, ParticipantQnaId, Question, QuestionId, TechInterviewId,
};
use crate::domain::ports::QuestionRepository;
use crate::entity::{comments, participant_qnas, questions};
use crate::error::DomainError;

/// PostgreSQL implementation of QuestionRepository
pub struct PostgresQuestionRepository<C = DatabaseConnection> {
    db: Arc<C>,
}

impl<C> PostgresQuestionRepository<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> QuestionRepository for PostgresQuestionRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<Question>, DomainError> {
        let db = self.db.as_ref();

        let rows = questions::Entity::find()
            .order_by_asc(questions::Column::CreatedAt)
            .order_by_asc(questions::Column::Id)
            .all(db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut participants: HashMap<Uuid, Vec<ParticipantQna>> = HashMap::new();
        for model in participant_qnas::Entity::find()
            .order_by_asc(participant_qnas::Column::Position)
            .all(db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        {
            participants
                .entry(model.question_id)
                .or_default()
                .push(model.into());
        }

        let mut comments: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for model in comments::Entity::find()
            .order_by_asc(comments::Column::Position)
            .all(db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        {
            comments.entry(model.question_id).or_default().push(model.into());
        }

        Ok(rows
            .into_iter()
            .map(|model| Question {
                id: Some(QuestionId(model.id)),
                space_id: model.space_id,
                author_id: model.author_id,
                author_nickname: model.author_nickname,
                tech_interview_id: TechInterviewId(model.tech_interview_id),
                participants: participants.remove(&model.id).unwrap_or_default(),
                comments: comments.remove(&model.id).unwrap_or_default(),
                created_at: Some(model.created_at.with_timezone(&Utc)),
            })
            .collect())
    }

    async fn save(&self, mut question: Question) -> Result<Question, DomainError> {
        let db = self.db.as_ref();

        let question_id = match question.id {
            Some(id) => id,
            None => {
                let model = questions::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    space_id: Set(question.space_id),
                    author_id: Set(question.author_id),
                    author_nickname: Set(question.author_nickname.clone()),
                    tech_interview_id: Set(question.tech_interview_id.0),
                    created_at: Set(Utc::now().fixed_offset()),
                }
                .insert(db)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;

                question.created_at = Some(model.created_at.with_timezone(&Utc));
                QuestionId(model.id)
            }
        };
        question.id = Some(question_id);

        let mut new_participants = Vec::new();
        for (position, participant) in question.participants.iter_mut().enumerate() {
            participant.question_id = Some(question_id);
            if participant.id.is_none() {
                let id = Uuid::new_v4();
                participant.id = Some(ParticipantQnaId(id));
                new_participants.push(participant_qnas::ActiveModel {
                    id: Set(id),
                    question_id: Set(question_id.0),
                    position: Set(position as i32),
                    member_id: Set(participant.member_id),
                    nickname: Set(participant.nickname.clone()),
                });
            }
        }
        insert_batched(db, new_participants).await?;

        // Comments go in after participants so their foreign keys resolve
        let mut new_comments = Vec::new();
        for (position, comment) in question.comments.iter_mut().enumerate() {
            comment.question_id = Some(question_id);
            if comment.id.is_none() {
                let id = Uuid::new_v4();
                comment.id = Some(CommentId(id));
                new_comments.push(comments::ActiveModel {
                    id: Set(id),
                    question_id: Set(question_id.0),
                    participant_qna_id: Set(comment.participant_id.0),
                    position: Set(position as i32),
                    comment: Set(comment.comment.clone()),
                });
            }
        }
        insert_batched(db, new_comments).await?;

        Ok(question)
    }
}

impl From<participant_qnas::Model> for ParticipantQna {
    fn from(model: participant_qnas::Model) -> Self {
        ParticipantQna {
            id: Some(ParticipantQnaId(model.id)),
            question_id: Some(QuestionId(model.question_id)),
            member_id: model.member_id,
            nickname: model.nickname,
        }
    }
}

impl From<comments::Model> for Comment {
    fn from(model: comments::Model) -> Self {
        Comment {
            id: Some(CommentId(model.id)),
            question_id: Some(QuestionId(model.question_id)),
            participant_id: ParticipantQnaId(model.participant_qna_id),
            comment: model.comment,
        }
    }
}
