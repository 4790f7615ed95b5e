//! Contest domain entity
//!
//! A timed contest in a space. The contest owns its participants, its
//! problems, and the answers joining the two.
//!
//! Answers are stored once on the contest. A participant's answers and a
//! problem's answers are views over that single join table, so registering
//! an answer makes it visible from both sides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tech_interview::TechInterviewId;
use crate::error::DomainError;

entity_id!(
    /// Unique identifier for a contest
    ContestId
);

entity_id!(
    /// Unique identifier for a contest participant
    ContestParticipantId
);

entity_id!(
    /// Unique identifier for a contest problem
    ProblemId
);

entity_id!(
    /// Unique identifier for an answer
    AnswerId
);

/// Submission status of a contest or of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Submit {
    InProgress,
    Completed,
}

impl std::fmt::Display for Submit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Submit::InProgress => write!(f, "in_progress"),
            Submit::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for Submit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_progress" | "inprogress" => Ok(Submit::InProgress),
            "completed" => Ok(Submit::Completed),
            _ => Err(format!("Unknown submit status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContestParticipant {
    pub id: Option<ContestParticipantId>,
    pub contest_id: Option<ContestId>,
    pub member_id: i64,
    pub nickname: String,
    pub submit: Submit,
}

#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    pub id: Option<ProblemId>,
    pub contest_id: Option<ContestId>,
    pub tech_interview_id: TechInterviewId,
}

/// A participant's answer to a problem, scored and reviewed
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub id: Option<AnswerId>,
    pub participant_id: ContestParticipantId,
    pub problem_id: ProblemId,
    pub answer: String,
    pub rank_score: i32,
    pub feedback: String,
}

impl Answer {
    pub fn new(
        participant_id: ContestParticipantId,
        problem_id: ProblemId,
        answer: impl Into<String>,
        rank_score: i32,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            participant_id,
            problem_id,
            answer: answer.into(),
            rank_score,
            feedback: feedback.into(),
        }
    }
}

/// A contest with its participants, problems and answers
#[derive(Debug, Clone, Serialize)]
pub struct Contest {
    pub id: Option<ContestId>,
    pub space_id: i64,
    pub title: String,
    pub timeout_millis: i64,
    pub submit: Submit,
    pub participants: Vec<ContestParticipant>,
    pub problems: Vec<Problem>,
    pub answers: Vec<Answer>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Contest {
    pub fn new(space_id: i64, title: impl Into<String>, timeout_millis: i64, submit: Submit) -> Self {
        Self {
            id: None,
            space_id,
            title: title.into(),
            timeout_millis,
            submit,
            participants: Vec::new(),
            problems: Vec::new(),
            answers: Vec::new(),
            created_at: None,
        }
    }

    pub fn add_participant(&mut self, member_id: i64, nickname: impl Into<String>, submit: Submit) {
        self.participants.push(ContestParticipant {
            id: None,
            contest_id: self.id,
            member_id,
            nickname: nickname.into(),
            submit,
        });
    }

    pub fn add_problem(&mut self, tech_interview_id: TechInterviewId) {
        self.problems.push(Problem {
            id: None,
            contest_id: self.id,
            tech_interview_id,
        });
    }

    /// Register an answer joining one of this contest's participants to one
    /// of its problems.
    pub fn register_answer(&mut self, answer: Answer) -> Result<(), DomainError> {
        if !self
            .participants
            .iter()
            .any(|p| p.id == Some(answer.participant_id))
        {
            return Err(DomainError::Validation(format!(
                "Participant {} does not belong to this contest",
                answer.participant_id
            )));
        }
        if !self.problems.iter().any(|p| p.id == Some(answer.problem_id)) {
            return Err(DomainError::Validation(format!(
                "Problem {} does not belong to this contest",
                answer.problem_id
            )));
        }

        self.answers.push(answer);
        Ok(())
    }

    /// Answers submitted by one participant
    pub fn answers_of_participant<'a>(
        &'a self,
        participant_id: &'a ContestParticipantId,
    ) -> impl Iterator<Item = &'a Answer> + 'a {
        self.answers
            .iter()
            .filter(move |a| &a.participant_id == participant_id)
    }

    /// Answers given to one problem
    pub fn answers_of_problem<'a>(
        &'a self,
        problem_id: &'a ProblemId,
    ) -> impl Iterator<Item = &'a Answer> + 'a {
        self.answers
            .iter()
            .filter(move |a| &a.problem_id == problem_id)
    }

    pub fn participant_ids(&self) -> Vec<ContestParticipantId> {
        self.participants.iter().filter_map(|p| p.id).collect()
    }

    pub fn problem_ids(&self) -> Vec<ProblemId> {
        self.problems.iter().filter_map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_contest() -> Contest {
        let mut contest = Contest::new(1, "Contest 0", 3_600_000, Submit::InProgress);
        contest.id = Some(ContestId::new());
        contest.add_participant(1, "participant1", Submit::Completed);
        contest.add_participant(2, "participant2", Submit::InProgress);
        contest.add_problem(TechInterviewId::new());
        for participant in &mut contest.participants {
            participant.id = Some(ContestParticipantId::new());
        }
        for problem in &mut contest.problems {
            problem.id = Some(ProblemId::new());
        }
        contest
    }

    #[test]
    fn submit_from_str() {
        assert_eq!("in_progress".parse::<Submit>().unwrap(), Submit::InProgress);
        assert_eq!("COMPLETED".parse::<Submit>().unwrap(), Submit::Completed);
        assert!("pending".parse::<Submit>().is_err());
    }

    #[test]
    fn children_carry_contest_id() {
        let contest = saved_contest();
        assert!(contest.participants.iter().all(|p| p.contest_id == contest.id));
        assert!(contest.problems.iter().all(|p| p.contest_id == contest.id));
    }

    #[test]
    fn registered_answer_is_visible_from_both_sides() {
        let mut contest = saved_contest();
        let participant_id = contest.participant_ids()[1];
        let problem_id = contest.problem_ids()[0];

        contest
            .register_answer(Answer::new(participant_id, problem_id, "text", 42, "ok"))
            .unwrap();

        assert_eq!(contest.answers_of_participant(&participant_id).count(), 1);
        assert_eq!(contest.answers_of_problem(&problem_id).count(), 1);
        let other = contest.participant_ids()[0];
        assert_eq!(contest.answers_of_participant(&other).count(), 0);
    }

    #[test]
    fn register_answer_rejects_foreign_participant() {
        let mut contest = saved_contest();
        let problem_id = contest.problem_ids()[0];

        let result = contest.register_answer(Answer::new(
            ContestParticipantId::new(),
            problem_id,
            "text",
            1,
            "ok",
        ));

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(contest.answers.is_empty());
    }

    #[test]
    fn register_answer_rejects_foreign_problem() {
        let mut contest = saved_contest();
        let participant_id = contest.participant_ids()[0];

        let result = contest.register_answer(Answer::new(
            participant_id,
            ProblemId::new(),
            "text",
            1,
            "ok",
        ));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
