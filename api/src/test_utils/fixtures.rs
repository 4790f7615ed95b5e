//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{
    Answer, Author, Contest, ContestId, ContestParticipantId, Note, ProblemId, Submit, TechClass,
    TechInterview, TechInterviewId,
};

/// Create a persisted tech interview
pub fn test_tech_interview() -> TechInterview {
    TechInterview {
        id: Some(TechInterviewId::new()),
        tech_class: TechClass::Database,
        question: "What is a covering index?".to_string(),
        created_at: Some(Utc::now()),
    }
}

/// Create a persisted contest in a space with the given number of
/// participants and problems, where every participant answered every problem
pub fn test_contest_in_space(space_id: i64, participants: usize, problems: usize) -> Contest {
    let mut contest = Contest::new(space_id, "Test contest", 3_600_000, Submit::InProgress);
    contest.id = Some(ContestId::new());
    contest.created_at = Some(Utc::now());

    for i in 0..participants {
        contest.add_participant(i as i64 + 1, format!("participant{}", i + 1), Submit::InProgress);
    }
    for _ in 0..problems {
        contest.add_problem(TechInterviewId::new());
    }
    for participant in &mut contest.participants {
        participant.id = Some(ContestParticipantId::new());
    }
    for problem in &mut contest.problems {
        problem.id = Some(ProblemId::new());
    }

    for participant_id in contest.participant_ids() {
        for problem_id in contest.problem_ids() {
            contest
                .register_answer(Answer::new(participant_id, problem_id, "answer", 50, "ok"))
                .expect("fixture answer belongs to the contest");
        }
    }
    contest
}

/// Create an unsaved public note
pub fn test_note() -> Note {
    Note::new(
        1,
        "Test note",
        "Some content",
        Author {
            id: 1,
            nickname: "author1".to_string(),
        },
        true,
    )
}
