//! PostgreSQL adapter for ContestRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::insert_batched;
use crate::domain::entities::{
    Answer, AnswerId, Contest, ContestId, ContestParticipant, ContestParticipantId, Problem,
    ProblemId, Submit, TechInterviewId,
};
use crate::domain::ports::ContestRepository;
use crate::entity::{answers, contest_participants, contests, problems};
use crate::error::DomainError;

/// PostgreSQL implementation of ContestRepository
pub struct PostgresContestRepository<C = DatabaseConnection> {
    db: Arc<C>,
}

impl<C> PostgresContestRepository<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

impl<C> PostgresContestRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    /// Load contests, optionally limited to one space, with all their children
    async fn load(&self, space_id: Option<i64>) -> Result<Vec<Contest>, DomainError> {
        let db = self.db.as_ref();

        let mut query = contests::Entity::find();
        if let Some(space_id) = space_id {
            query = query.filter(contests::Column::SpaceId.eq(space_id));
        }
        let rows = query
            .order_by_asc(contests::Column::CreatedAt)
            .order_by_asc(contests::Column::Id)
            .all(db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let contest_ids: Vec<Uuid> = rows.iter().map(|m| m.id).collect();

        let participant_rows = contest_participants::Entity::find()
            .filter(contest_participants::Column::ContestId.is_in(contest_ids.clone()))
            .order_by_asc(contest_participants::Column::Position)
            .all(db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let problem_rows = problems::Entity::find()
            .filter(problems::Column::ContestId.is_in(contest_ids.clone()))
            .order_by_asc(problems::Column::Position)
            .all(db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let answer_rows = answers::Entity::find()
            .inner_join(contest_participants::Entity)
            .filter(contest_participants::Column::ContestId.is_in(contest_ids))
            .order_by_asc(answers::Column::Position)
            .all(db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let contest_of_participant: HashMap<Uuid, Uuid> = participant_rows
            .iter()
            .map(|p| (p.id, p.contest_id))
            .collect();

        let mut participants: HashMap<Uuid, Vec<ContestParticipant>> = HashMap::new();
        for model in participant_rows {
            participants
                .entry(model.contest_id)
                .or_default()
                .push(model.into());
        }

        let mut problems: HashMap<Uuid, Vec<Problem>> = HashMap::new();
        for model in problem_rows {
            problems.entry(model.contest_id).or_default().push(model.into());
        }

        let mut answers: HashMap<Uuid, Vec<Answer>> = HashMap::new();
        for model in answer_rows {
            if let Some(contest_id) = contest_of_participant.get(&model.participant_id) {
                answers.entry(*contest_id).or_default().push(model.into());
            }
        }

        Ok(rows
            .into_iter()
            .map(|model| Contest {
                id: Some(ContestId(model.id)),
                space_id: model.space_id,
                title: model.title,
                timeout_millis: model.timeout_millis,
                submit: model.submit.parse().unwrap_or(Submit::InProgress),
                participants: participants.remove(&model.id).unwrap_or_default(),
                problems: problems.remove(&model.id).unwrap_or_default(),
                answers: answers.remove(&model.id).unwrap_or_default(),
                created_at: Some(model.created_at.with_timezone(&Utc)),
            })
            .collect())
    }
}

#[async_trait]
impl<C> ContestRepository for PostgresContestRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<Contest>, DomainError> {
        self.load(None).await
    }

    async fn find_by_space(&self, space_id: i64) -> Result<Vec<Contest>, DomainError> {
        self.load(Some(space_id)).await
    }

    async fn save(&self, mut contest: Contest) -> Result<Contest, DomainError> {
        let db = self.db.as_ref();

        let contest_id = match contest.id {
            Some(id) => id,
            None => {
                let model = contests::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    space_id: Set(contest.space_id),
                    title: Set(contest.title.clone()),
                    timeout_millis: Set(contest.timeout_millis),
                    submit: Set(contest.submit.to_string()),
                    created_at: Set(Utc::now().fixed_offset()),
                }
                .insert(db)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;

                contest.created_at = Some(model.created_at.with_timezone(&Utc));
                ContestId(model.id)
            }
        };
        contest.id = Some(contest_id);

        let mut new_participants = Vec::new();
        for (position, participant) in contest.participants.iter_mut().enumerate() {
            participant.contest_id = Some(contest_id);
            if participant.id.is_none() {
                let id = Uuid::new_v4();
                participant.id = Some(ContestParticipantId(id));
                new_participants.push(contest_participants::ActiveModel {
                    id: Set(id),
                    contest_id: Set(contest_id.0),
                    position: Set(position as i32),
                    member_id: Set(participant.member_id),
                    nickname: Set(participant.nickname.clone()),
                    submit: Set(participant.submit.to_string()),
                });
            }
        }
        insert_batched(db, new_participants).await?;

        let mut new_problems = Vec::new();
        for (position, problem) in contest.problems.iter_mut().enumerate() {
            problem.contest_id = Some(contest_id);
            if problem.id.is_none() {
                let id = Uuid::new_v4();
                problem.id = Some(ProblemId(id));
                new_problems.push(problems::ActiveModel {
                    id: Set(id),
                    contest_id: Set(contest_id.0),
                    position: Set(position as i32),
                    tech_interview_id: Set(problem.tech_interview_id.0),
                });
            }
        }
        insert_batched(db, new_problems).await?;

        let mut new_answers = Vec::new();
        for (position, answer) in contest.answers.iter_mut().enumerate() {
            if answer.id.is_none() {
                let id = Uuid::new_v4();
                answer.id = Some(AnswerId(id));
                new_answers.push(answers::ActiveModel {
                    id: Set(id),
                    participant_id: Set(answer.participant_id.0),
                    problem_id: Set(answer.problem_id.0),
                    position: Set(position as i32),
                    answer: Set(answer.answer.clone()),
                    rank_score: Set(answer.rank_score),
                    feedback: Set(answer.feedback.clone()),
                });
            }
        }
        insert_batched(db, new_answers).await?;

        Ok(contest)
    }
}

impl From<contest_participants::Model> for ContestParticipant {
    fn from(model: contest_participants::Model) -> Self {
        ContestParticipant {
            id: Some(ContestParticipantId(model.id)),
            contest_id: Some(ContestId(model.contest_id)),
            member_id: model.member_id,
            nickname: model.nickname,
            submit: model.submit.parse().unwrap_or(Submit::InProgress),
        }
    }
}

impl From<problems::Model> for Problem {
    fn from(model: problems::Model) -> Self {
        Problem {
            id: Some(ProblemId(model.id)),
            contest_id: Some(ContestId(model.contest_id)),
            tech_interview_id: TechInterviewId(model.tech_interview_id),
        }
    }
}

impl From<answers::Model> for Answer {
    fn from(model: answers::Model) -> Self {
        Answer {
            id: Some(AnswerId(model.id)),
            participant_id: ContestParticipantId(model.participant_id),
            problem_id: ProblemId(model.problem_id),
            answer: model.answer,
            rank_score: model.rank_score,
            feedback: model.feedback,
        }
    }
}
