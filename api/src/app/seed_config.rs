//! Seed data configuration constants
//!
//! Volumes, identity cycles and canned text used when generating development data.

/// Default number of aggregate roots generated per family
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// Default number of child records generated per aggregate root
pub const DEFAULT_FAN_OUT_COUNT: usize = 500;

/// Every seeded question, contest and note lives in this space
pub const SEED_SPACE_ID: i64 = 1;

/// Question authors cycle through this many synthetic members
pub const QUESTION_AUTHOR_CYCLE: usize = 10;

/// Q&A participants cycle through this many synthetic members
pub const QNA_MEMBER_CYCLE: usize = 100;

/// Contest participants cycle through this many synthetic members
pub const CONTEST_MEMBER_CYCLE: usize = 200;

/// Note authors cycle through this many synthetic members
pub const NOTE_AUTHOR_CYCLE: usize = 20;

/// Every n-th contest participant (starting with the first) has completed
pub const COMPLETED_PARTICIPANT_STRIDE: usize = 3;

/// Contest time limit: one hour
pub const CONTEST_TIMEOUT_MILLIS: i64 = 3_600_000;

/// At most this many participants per contest receive answers
pub const MAX_ANSWERING_PARTICIPANTS: usize = 50;

/// At most this many problems per contest receive answers
pub const MAX_ANSWERED_PROBLEMS: usize = 10;

/// Highest rank score an answer can receive (lowest is 1)
pub const MAX_RANK_SCORE: usize = 100;

/// Progress is logged after this many aggregate roots
pub const PROGRESS_LOG_INTERVAL: usize = 10;

pub const QUESTION_TEXTS: [&str; 8] = [
    "Explain how garbage collection works on the JVM.",
    "How does Spring Boot auto-configuration decide what to load?",
    "What is the N+1 query problem and how do you fix it?",
    "What principles guide RESTful API design?",
    "What are the trade-offs of adding a database index?",
    "How would you handle concurrent updates to the same row?",
    "Describe the caching strategies you have used.",
    "What are the pros and cons of a microservice architecture?",
];

pub const COMMENT_TEXTS: [&str; 5] = [
    "Great question!",
    "I would like to hear more about this part.",
    "This comes up a lot in real projects.",
    "I think this needs a bit more explanation.",
    "Please share your own experience with it.",
];

pub const ANSWER_TEXTS: [&str; 5] = [
    "This can be solved as follows...",
    "Let me start with the basic concepts...",
    "Speaking from production experience...",
    "The theory and the implementation differ in that...",
    "From a performance point of view...",
];

pub const NOTE_TEXTS: [&str; 5] = [
    "Notes for tech interview preparation.",
    "A summary of the key concepts.",
    "Patterns that show up often in practice.",
    "Tips collected for performance tuning.",
    "Lessons learned from troubleshooting.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_caps_are_positive() {
        assert!(MAX_ANSWERING_PARTICIPANTS > 0);
        assert!(MAX_ANSWERED_PROBLEMS > 0);
    }

    #[test]
    fn contest_timeout_is_one_hour() {
        assert_eq!(CONTEST_TIMEOUT_MILLIS, 60 * 60 * 1000);
    }

    #[test]
    fn canned_text_tables_are_populated() {
        assert!(QUESTION_TEXTS.iter().all(|t| !t.is_empty()));
        assert!(COMMENT_TEXTS.iter().all(|t| !t.is_empty()));
        assert!(ANSWER_TEXTS.iter().all(|t| !t.is_empty()));
        assert!(NOTE_TEXTS.iter().all(|t| !t.is_empty()));
    }
}
