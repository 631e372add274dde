//! The quiz session state machine.
//!
//! A session walks `InProgress(i, revealed) -> Completed`, one question at a time. Every
//! transition is a method on [`QuizSession`]; calls that do not apply in the
//! current phase are no-ops and report so through their return value.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SessionError;
use crate::model::{Outcome, OutcomeCounts, QuestionRecord, ScoreTier};

pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 20;
pub const DEFAULT_MIN_QUESTIONS: usize = 10;
pub const DEFAULT_MAX_QUESTIONS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub seconds_per_question: u32,
    pub min_questions: usize,
    pub max_questions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            min_questions: DEFAULT_MIN_QUESTIONS,
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress { index: usize, revealed: bool },
    Completed,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The question was already revealed or the session is over.
    Ignored,
    Counting(u32),
    /// The countdown hit zero and revealed the question without scoring.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current question has not been revealed yet.
    Ignored,
    Next(usize),
    Completed,
}

/// Shuffles `all` and keeps a random number of questions in `min..=max`.
///
/// When `all` is smaller than the drawn size, every question is used.
pub fn draw_pool<R: Rng + ?Sized>(
    all: &[QuestionRecord],
    min: usize,
    max: usize,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    let mut pool = all.to_vec();
    pool.shuffle(rng);

    let wanted = rng.gen_range(min..=max.max(min));
    if wanted > pool.len() {
        log::warn!(
            "question bank has {} questions, fewer than the {} requested; using all of them",
            pool.len(),
            wanted
        );
    }
    pool.truncate(wanted);
    pool
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    pool: Vec<QuestionRecord>,
    current_index: usize,
    selected_option: Option<usize>,
    revealed: bool,
    score: usize,
    seconds_per_question: u32,
    seconds_remaining: u32,
    completed: bool,
    outcomes: Vec<Outcome>,
}

impl QuizSession {
    /// Draws a fresh pool from `all` and starts on its first question.
    pub fn start<R: Rng + ?Sized>(
        all: &[QuestionRecord],
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if all.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        let pool = draw_pool(all, config.min_questions, config.max_questions, rng);
        log::info!("starting quiz with {} questions", pool.len());
        Self::from_pool(pool, config.seconds_per_question)
    }

    /// Starts on an already drawn pool, keeping its order.
    pub fn from_pool(
        pool: Vec<QuestionRecord>,
        seconds_per_question: u32,
    ) -> Result<Self, SessionError> {
        if pool.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        Ok(Self {
            pool,
            current_index: 0,
            selected_option: None,
            revealed: false,
            score: 0,
            seconds_per_question,
            seconds_remaining: seconds_per_question,
            completed: false,
            outcomes: Vec::new(),
        })
    }

    /// Discards this session and starts a new one on a freshly drawn pool.
    pub fn restart<R: Rng + ?Sized>(
        self,
        all: &[QuestionRecord],
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        log::debug!(
            "discarding session at question {} with score {}",
            self.current_index + 1,
            self.score
        );
        Self::start(all, config, rng)
    }

    pub fn pool(&self) -> &[QuestionRecord] {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &QuestionRecord {
        &self.pool[self.current_index]
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn seconds_per_question(&self) -> u32 {
        self.seconds_per_question
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.pool.len()
    }

    /// One entry per revealed question, in pool order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// How the current question was locked in, once revealed.
    pub fn current_outcome(&self) -> Option<Outcome> {
        if self.revealed {
            self.outcomes.get(self.current_index).copied()
        } else {
            None
        }
    }

    pub fn outcome_counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for outcome in &self.outcomes {
            match outcome {
                Outcome::Correct => counts.correct += 1,
                Outcome::Incorrect => counts.incorrect += 1,
                Outcome::TimedOut => counts.timed_out += 1,
            }
        }
        counts
    }

    pub fn phase(&self) -> Phase {
        if self.completed {
            Phase::Completed
        } else {
            Phase::InProgress {
                index: self.current_index,
                revealed: self.revealed,
            }
        }
    }

    /// Tentatively picks an option. Locked once the question is revealed.
    pub fn select_option(&mut self, option: usize) -> bool {
        if self.revealed || self.completed {
            return false;
        }
        self.selected_option = Some(option);
        true
    }

    /// Locks in the pending selection and scores it.
    ///
    /// Returns `None` without touching state when nothing is selected or the
    /// question is already revealed.
    pub fn submit_answer(&mut self) -> Option<Outcome> {
        if self.revealed || self.completed {
            return None;
        }
        let selected = self.selected_option?;

        let outcome = if self.current_question().is_correct(selected) {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.reveal(outcome);
        Some(outcome)
    }

    /// Counts the current question down by one second.
    ///
    /// Reaching zero reveals the question as timed out. The pending
    /// selection is never scored on this path.
    pub fn tick(&mut self) -> Tick {
        if self.revealed || self.completed {
            return Tick::Ignored;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.reveal(Outcome::TimedOut);
            Tick::Expired
        } else {
            Tick::Counting(self.seconds_remaining)
        }
    }

    /// Moves past a revealed question, or completes the session after the last one.
    pub fn advance(&mut self) -> Advance {
        if !self.revealed || self.completed {
            return Advance::Ignored;
        }
        if self.current_index + 1 < self.pool.len() {
            self.current_index += 1;
            self.seconds_remaining = self.seconds_per_question;
            self.revealed = false;
            self.selected_option = None;
            Advance::Next(self.current_index)
        } else {
            self.completed = true;
            log::info!("quiz completed with score {}/{}", self.score, self.pool.len());
            Advance::Completed
        }
    }

    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score, self.pool.len())
    }

    pub fn score_message(&self) -> &'static str {
        self.score_tier().message()
    }

    fn reveal(&mut self, outcome: Outcome) {
        self.revealed = true;
        self.outcomes.push(outcome);
        log::debug!(
            "question {} revealed as {:?}, score {}",
            self.current_index + 1,
            outcome,
            self.score
        );
    }
}
