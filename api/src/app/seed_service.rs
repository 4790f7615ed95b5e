//! Seed service
//!
//! Populates an empty development store with interrelated synthetic data:
//! tech interview questions, Q&A threads, contests with answers, and notes.
//! The volumes are large on purpose so list endpoints show their N+1 behaviour.
//!
//! Families are generated in dependency order. Each aggregate is saved, then
//! children that reference freshly assigned identities are attached and the
//! aggregate is saved again.

use std::sync::Arc;

use super::random::RandomSource;
use super::seed_config::*;
use crate::config::Profile;
use crate::domain::entities::{
    Answer, Author, Contest, Note, Question, Submit, TechClass, TechInterview, TechInterviewId,
};
use crate::domain::ports::{
    ContestRepository, NoteRepository, QuestionRepository, TechInterviewRepository,
};
use crate::error::DomainError;

/// How much data a seeding run generates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSettings {
    /// Aggregate roots per family (notes get twice as many)
    pub sample_count: usize,
    /// Child records per aggregate root
    pub fan_out_count: usize,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            fan_out_count: DEFAULT_FAN_OUT_COUNT,
        }
    }
}

impl SeedSettings {
    /// Answers generated per contest: participants x problems, both capped
    pub fn answers_per_contest(&self) -> usize {
        self.fan_out_count.min(MAX_ANSWERING_PARTICIPANTS)
            * self.fan_out_count.min(MAX_ANSWERED_PROBLEMS)
    }
}

/// Number of records written per family
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub tech_interviews: usize,
    pub questions: usize,
    pub question_participants: usize,
    pub comments: usize,
    pub contests: usize,
    pub contest_participants: usize,
    pub problems: usize,
    pub answers: usize,
    pub notes: usize,
}

/// Result of a seeding attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The profile forbids seeding; storage was not touched
    Disabled,
    /// Data already exists; nothing was written
    Skipped,
    Seeded(SeedReport),
}

/// Service that seeds development data through the repository ports
pub struct SeedService<TR, QR, CR, NR>
where
    TR: TechInterviewRepository,
    QR: QuestionRepository,
    CR: ContestRepository,
    NR: NoteRepository,
{
    tech_interviews: Arc<TR>,
    questions: Arc<QR>,
    contests: Arc<CR>,
    notes: Arc<NR>,
    settings: SeedSettings,
}

impl<TR, QR, CR, NR> SeedService<TR, QR, CR, NR>
where
    TR: TechInterviewRepository,
    QR: QuestionRepository,
    CR: ContestRepository,
    NR: NoteRepository,
{
    pub fn new(
        tech_interviews: Arc<TR>,
        questions: Arc<QR>,
        contests: Arc<CR>,
        notes: Arc<NR>,
        settings: SeedSettings,
    ) -> Self {
        Self {
            tech_interviews,
            questions,
            contests,
            notes,
            settings,
        }
    }

    /// Seed unless running under the production profile
    pub async fn run_for_profile<R>(
        &self,
        profile: &Profile,
        rng: &mut R,
    ) -> Result<SeedOutcome, DomainError>
    where
        R: RandomSource + Send,
    {
        if !profile.allows_seeding() {
            tracing::info!("Seeding disabled for profile '{}'", profile);
            return Ok(SeedOutcome::Disabled);
        }

        self.run(rng).await
    }

    /// Seed every family, unless any tech interview already exists.
    ///
    /// Only tech interviews are checked: a store where they exist but later
    /// families are incomplete is skipped as well.
    pub async fn run<R>(&self, rng: &mut R) -> Result<SeedOutcome, DomainError>
    where
        R: RandomSource + Send,
    {
        if !self.tech_interviews.find_all().await?.is_empty() {
            tracing::info!("Seed data already present, skipping");
            return Ok(SeedOutcome::Skipped);
        }

        tracing::info!(
            "Seeding development data (samples: {}, fan-out: {})",
            self.settings.sample_count,
            self.settings.fan_out_count
        );

        let mut report = SeedReport::default();

        let tech_interview_ids = self.seed_tech_interviews(rng, &mut report).await?;
        self.seed_questions(&tech_interview_ids, rng, &mut report)
            .await?;
        self.seed_contests(&tech_interview_ids, rng, &mut report)
            .await?;
        self.seed_notes(rng, &mut report).await?;

        tracing::info!("Seeding complete: {:?}", report);
        Ok(SeedOutcome::Seeded(report))
    }

    async fn seed_tech_interviews<R>(
        &self,
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<Vec<TechInterviewId>, DomainError>
    where
        R: RandomSource + Send,
    {
        let count = self.settings.sample_count;
        tracing::info!("Creating {} tech interviews", count);

        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let tech_class = TechClass::ALL[rng.next_int(TechClass::ALL.len())];
            let question = format!(
                "Tech interview question {}: {}",
                i,
                rng.pick(&QUESTION_TEXTS)
            );

            let saved = self
                .tech_interviews
                .save(TechInterview::new(tech_class, question))
                .await?;
            ids.push(saved.id.ok_or_else(|| unsaved("tech interview"))?);
        }

        report.tech_interviews = ids.len();
        tracing::info!("Created {} tech interviews", ids.len());
        Ok(ids)
    }

    async fn seed_questions<R>(
        &self,
        tech_interview_ids: &[TechInterviewId],
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<(), DomainError>
    where
        R: RandomSource + Send,
    {
        let count = self.settings.sample_count;
        let fan_out = self.settings.fan_out_count;
        tracing::info!(
            "Creating {} questions ({} participants and {} comments each)",
            count,
            fan_out,
            fan_out
        );

        for i in 0..count {
            let author_id = (i % QUESTION_AUTHOR_CYCLE + 1) as i64;
            let question = Question::new(
                SEED_SPACE_ID,
                author_id,
                format!("author{}", author_id),
                tech_interview_ids[i % tech_interview_ids.len()],
            );
            let mut question = self.questions.save(question).await?;

            for j in 0..fan_out {
                let member_id = (j % QNA_MEMBER_CYCLE + 1) as i64;
                question.add_participant(member_id, format!("participant{}", member_id));
            }
            let mut question = self.questions.save(question).await?;

            let participant_ids = question.participant_ids();
            for j in 0..fan_out {
                let participant_id = participant_ids
                    .get(j % participant_ids.len().max(1))
                    .copied()
                    .ok_or_else(|| unsaved("question participant"))?;
                let text = format!("Comment {}: {}", j, rng.pick(&COMMENT_TEXTS));
                question.add_comment(participant_id, text)?;
            }
            let question = self.questions.save(question).await?;

            report.questions += 1;
            report.question_participants += question.participants.len();
            report.comments += question.comments.len();
            tracing::debug!(
                "Question {} seeded with {} participants and {} comments",
                i,
                question.participants.len(),
                question.comments.len()
            );

            if (i + 1) % PROGRESS_LOG_INTERVAL == 0 {
                tracing::info!("Question progress: {}/{}", i + 1, count);
            }
        }

        tracing::info!("Created {} questions", report.questions);
        Ok(())
    }

    async fn seed_contests<R>(
        &self,
        tech_interview_ids: &[TechInterviewId],
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<(), DomainError>
    where
        R: RandomSource + Send,
    {
        let count = self.settings.sample_count;
        let fan_out = self.settings.fan_out_count;
        tracing::info!(
            "Creating {} contests ({} participants, {} problems and {} answers each)",
            count,
            fan_out,
            fan_out,
            self.settings.answers_per_contest()
        );

        for i in 0..count {
            let mut contest = Contest::new(
                SEED_SPACE_ID,
                format!("Tech interview contest {}", i),
                CONTEST_TIMEOUT_MILLIS,
                Submit::InProgress,
            );

            for j in 0..fan_out {
                let member_id = (j % CONTEST_MEMBER_CYCLE + 1) as i64;
                let submit = if j % COMPLETED_PARTICIPANT_STRIDE == 0 {
                    Submit::Completed
                } else {
                    Submit::InProgress
                };
                contest.add_participant(member_id, format!("participant{}", member_id), submit);
            }
            for j in 0..fan_out {
                contest.add_problem(tech_interview_ids[j % tech_interview_ids.len()]);
            }
            let mut contest = self.contests.save(contest).await?;

            let participant_ids = contest.participant_ids();
            let problem_ids = contest.problem_ids();
            for (p, participant_id) in participant_ids
                .iter()
                .take(MAX_ANSWERING_PARTICIPANTS)
                .enumerate()
            {
                for (pr, problem_id) in problem_ids.iter().take(MAX_ANSWERED_PROBLEMS).enumerate() {
                    let answer = Answer::new(
                        *participant_id,
                        *problem_id,
                        format!(
                            "Answer {}-{}: {} {}",
                            p,
                            pr,
                            rng.pick(&ANSWER_TEXTS),
                            rng.next_token()
                        ),
                        (rng.next_int(MAX_RANK_SCORE) + 1) as i32,
                        format!("Feedback {}-{}", p, pr),
                    );
                    contest.register_answer(answer)?;
                }
            }
            let contest = self.contests.save(contest).await?;

            report.contests += 1;
            report.contest_participants += contest.participants.len();
            report.problems += contest.problems.len();
            report.answers += contest.answers.len();
            tracing::debug!(
                "Contest {} seeded with {} answers",
                i,
                contest.answers.len()
            );

            if (i + 1) % PROGRESS_LOG_INTERVAL == 0 {
                tracing::info!("Contest progress: {}/{}", i + 1, count);
            }
        }

        tracing::info!("Created {} contests", report.contests);
        Ok(())
    }

    async fn seed_notes<R>(&self, rng: &mut R, report: &mut SeedReport) -> Result<(), DomainError>
    where
        R: RandomSource + Send,
    {
        let count = self.settings.sample_count;
        tracing::info!("Creating {} notes (public and private)", count * 2);

        for i in 0..count {
            let author_id = (i % NOTE_AUTHOR_CYCLE + 1) as i64;
            let author = Author {
                id: author_id,
                nickname: format!("author{}", author_id),
            };

            for (public_access, label) in [(true, "Public"), (false, "Private")] {
                let content = format!(
                    "{} note content {}: {} {}",
                    label,
                    i,
                    rng.pick(&NOTE_TEXTS),
                    rng.next_token()
                );
                let note = Note::new(
                    SEED_SPACE_ID,
                    format!("{} note {}", label, i),
                    content,
                    author.clone(),
                    public_access,
                );
                self.notes.save(note).await?;
                report.notes += 1;
            }
        }

        tracing::info!("Created {} notes", report.notes);
        Ok(())
    }
}

fn unsaved(what: &str) -> DomainError {
    DomainError::Internal(format!("Repository returned a {} without an id", what))
}
