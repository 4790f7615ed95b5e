//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior: every
//! repository counts its calls and can be told to fail its saves.
//!
//! Saves follow the same rules as the PostgreSQL adapters: anything without
//! an id gets one, back-references are filled in, and insertion order is kept.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    AnswerId, CommentId, Contest, ContestId, ContestParticipantId, Note, NoteId,
    ParticipantQnaId, ProblemId, Question, QuestionId, TechInterview, TechInterviewId,
};
use crate::domain::ports::{
    ContestRepository, NoteRepository, QuestionRepository, TechInterviewRepository,
};
use crate::error::DomainError;

// ============================================================================
// Call bookkeeping shared by all in-memory repositories
// ============================================================================

#[derive(Default)]
struct CallLog {
    saves: Arc<RwLock<usize>>,
    finds: Arc<RwLock<usize>>,
    save_failure: Arc<RwLock<Option<String>>>,
}

impl CallLog {
    fn record_find(&self) {
        *self.finds.write().unwrap() += 1;
    }

    /// Count a save, or fail it when a failure has been configured
    fn record_save(&self) -> Result<(), DomainError> {
        if let Some(msg) = self.save_failure.read().unwrap().clone() {
            return Err(DomainError::Database(msg));
        }
        *self.saves.write().unwrap() += 1;
        Ok(())
    }
}

/// Replace the entry with the same id, or append a new one
fn upsert<T, K: PartialEq>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) {
    let id = key(&item);
    match items.iter().position(|existing| key(existing) == id) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

macro_rules! call_log_accessors {
    ($repo:ty) => {
        impl $repo {
            /// Number of successful `save` calls
            pub fn save_count(&self) -> usize {
                *self.calls.saves.read().unwrap()
            }

            /// Number of read calls (`find_all` and `find_by_space`)
            pub fn find_count(&self) -> usize {
                *self.calls.finds.read().unwrap()
            }

            /// Make every following `save` fail with a database error
            pub fn fail_saves(&self, message: &str) {
                *self.calls.save_failure.write().unwrap() = Some(message.to_string());
            }
        }
    };
}

// ============================================================================
// In-Memory Tech Interview Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTechInterviewRepository {
    tech_interviews: Arc<RwLock<Vec<TechInterview>>>,
    calls: CallLog,
}

impl InMemoryTechInterviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a tech interview for testing
    pub fn with_tech_interview(self, mut tech_interview: TechInterview) -> Self {
        tech_interview.id.get_or_insert_with(TechInterviewId::new);
        self.tech_interviews.write().unwrap().push(tech_interview);
        self
    }
}

call_log_accessors!(InMemoryTechInterviewRepository);

#[async_trait]
impl TechInterviewRepository for InMemoryTechInterviewRepository {
    async fn find_all(&self) -> Result<Vec<TechInterview>, DomainError> {
        self.calls.record_find();
        Ok(self.tech_interviews.read().unwrap().clone())
    }

    async fn save(&self, mut tech_interview: TechInterview) -> Result<TechInterview, DomainError> {
        self.calls.record_save()?;

        if tech_interview.id.is_none() {
            tech_interview.id = Some(TechInterviewId::new());
            tech_interview.created_at = Some(Utc::now());
        }

        let mut tech_interviews = self.tech_interviews.write().unwrap();
        upsert(&mut tech_interviews, tech_interview.clone(), |t| t.id);
        Ok(tech_interview)
    }
}

// ============================================================================
// In-Memory Question Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
    calls: CallLog,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

call_log_accessors!(InMemoryQuestionRepository);

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, DomainError> {
        self.calls.record_find();
        Ok(self.questions.read().unwrap().clone())
    }

    async fn save(&self, mut question: Question) -> Result<Question, DomainError> {
        self.calls.record_save()?;

        let question_id = *question.id.get_or_insert_with(QuestionId::new);
        question.created_at.get_or_insert_with(Utc::now);

        for participant in question.participants.iter_mut() {
            participant.id.get_or_insert_with(ParticipantQnaId::new);
            participant.question_id = Some(question_id);
        }
        for comment in question.comments.iter_mut() {
            if question
                .participants
                .iter()
                .all(|p| p.id != Some(comment.participant_id))
            {
                return Err(DomainError::Database(format!(
                    "Comment references unknown participant {}",
                    comment.participant_id
                )));
            }
            comment.id.get_or_insert_with(CommentId::new);
            comment.question_id = Some(question_id);
        }

        let mut questions = self.questions.write().unwrap();
        upsert(&mut questions, question.clone(), |q| q.id);
        Ok(question)
    }
}

// ============================================================================
// In-Memory Contest Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryContestRepository {
    contests: Arc<RwLock<Vec<Contest>>>,
    calls: CallLog,
}

impl InMemoryContestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a contest for testing
    pub fn with_contest(self, mut contest: Contest) -> Self {
        contest.id.get_or_insert_with(ContestId::new);
        self.contests.write().unwrap().push(contest);
        self
    }
}

call_log_accessors!(InMemoryContestRepository);

#[async_trait]
impl ContestRepository for InMemoryContestRepository {
    async fn find_all(&self) -> Result<Vec<Contest>, DomainError> {
        self.calls.record_find();
        Ok(self.contests.read().unwrap().clone())
    }

    async fn find_by_space(&self, space_id: i64) -> Result<Vec<Contest>, DomainError> {
        self.calls.record_find();
        let contests = self.contests.read().unwrap();
        Ok(contests
            .iter()
            .filter(|c| c.space_id == space_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut contest: Contest) -> Result<Contest, DomainError> {
        self.calls.record_save()?;

        let contest_id = *contest.id.get_or_insert_with(ContestId::new);
        contest.created_at.get_or_insert_with(Utc::now);

        for participant in contest.participants.iter_mut() {
            participant.id.get_or_insert_with(ContestParticipantId::new);
            participant.contest_id = Some(contest_id);
        }
        for problem in contest.problems.iter_mut() {
            problem.id.get_or_insert_with(ProblemId::new);
            problem.contest_id = Some(contest_id);
        }
        for answer in contest.answers.iter_mut() {
            if contest
                .participants
                .iter()
                .all(|p| p.id != Some(answer.participant_id))
            {
                return Err(DomainError::Database(format!(
                    "Answer references unknown participant {}",
                    answer.participant_id
                )));
            }
            if contest
                .problems
                .iter()
                .all(|p| p.id != Some(answer.problem_id))
            {
                return Err(DomainError::Database(format!(
                    "Answer references unknown problem {}",
                    answer.problem_id
                )));
            }
            answer.id.get_or_insert_with(AnswerId::new);
        }

        let mut contests = self.contests.write().unwrap();
        upsert(&mut contests, contest.clone(), |c| c.id);
        Ok(contest)
    }
}

// ============================================================================
// In-Memory Note Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<Vec<Note>>>,
    calls: CallLog,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

call_log_accessors!(InMemoryNoteRepository);

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn find_all(&self) -> Result<Vec<Note>, DomainError> {
        self.calls.record_find();
        Ok(self.notes.read().unwrap().clone())
    }

    async fn save(&self, mut note: Note) -> Result<Note, DomainError> {
        self.calls.record_save()?;

        if note.id.is_none() {
            note.id = Some(NoteId::new());
            note.created_at = Some(Utc::now());
        }

        let mut notes = self.notes.write().unwrap();
        upsert(&mut notes, note.clone(), |n| n.id);
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Answer, Submit};
    use crate::test_utils::test_contest_in_space;

    #[tokio::test]
    async fn find_by_space_counts_as_a_read() {
        let repo = InMemoryContestRepository::new().with_contest(test_contest_in_space(1, 1, 1));

        repo.find_by_space(1).await.unwrap();
        repo.find_all().await.unwrap();

        assert_eq!(repo.find_count(), 2);
    }

    #[tokio::test]
    async fn contest_save_rejects_answer_to_foreign_problem() {
        let repo = InMemoryContestRepository::new();
        let mut contest = test_contest_in_space(1, 1, 1);
        let other = test_contest_in_space(1, 1, 1);

        // Bypass register_answer to reach the store with a dangling reference
        contest.answers.push(Answer::new(
            contest.participant_ids()[0],
            other.problem_ids()[0],
            "answer",
            10,
            "ok",
        ));

        let result = repo.save(contest).await;
        assert!(matches!(result, Err(DomainError::Database(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn contest_save_rejects_answer_from_foreign_participant() {
        let repo = InMemoryContestRepository::new();
        let mut contest = Contest::new(1, "Contest", 1_000, Submit::InProgress);
        contest.add_problem(TechInterviewId::new());
        let mut contest = repo.save(contest).await.unwrap();
        let other = test_contest_in_space(1, 1, 1);

        contest.answers.push(Answer::new(
            other.participant_ids()[0],
            contest.problem_ids()[0],
            "answer",
            10,
            "ok",
        ));

        let result = repo.save(contest).await;
        assert!(matches!(result, Err(DomainError::Database(_))));
    }

    #[tokio::test]
    async fn contest_save_assigns_answer_ids() {
        let repo = InMemoryContestRepository::new();
        let saved = repo.save(test_contest_in_space(1, 2, 2)).await.unwrap();

        assert_eq!(saved.answers.len(), 4);
        assert!(saved.answers.iter().all(|a| a.id.is_some()));
    }
}
