use serde::{Deserialize, Serialize};

/// One multiple-choice question as it appears in the bank file.
///
/// `answer` is the 1-based position of the correct option; `options` is
/// indexed from 0 everywhere else in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub answer: u32,
}

impl QuestionRecord {
    pub fn new(question: impl Into<String>, options: &[&str], answer: u32) -> Self {
        Self {
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
        }
    }

    /// Zero-based index of the correct option, if `answer` is non-zero.
    pub fn correct_index(&self) -> Option<usize> {
        (self.answer as usize).checked_sub(1)
    }

    /// Out-of-range answers never match, so a malformed record scores as wrong.
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_index() == Some(option)
    }

    pub fn correct_option_text(&self) -> Option<&str> {
        self.correct_index()
            .and_then(|i| self.options.get(i))
            .map(|s| s.as_str())
    }
}

/// Accepted top-level shapes of a bank file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BankDocument {
    Plain(Vec<QuestionRecord>),
    Titled {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        tagline: Option<String>,
        questions: Vec<QuestionRecord>,
    },
}

/// How a revealed question was locked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    TimedOut,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub correct: usize,
    pub incorrect: usize,
    pub timed_out: usize,
}

/// Final score band, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    GoodJob,
    NotBad,
    KeepPracticing,
}

impl ScoreTier {
    /// Thresholds are 80/60/40 percent, inclusive on the upper tier.
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return ScoreTier::KeepPracticing;
        }
        let scaled = score * 100;
        if scaled >= total * 80 {
            ScoreTier::Excellent
        } else if scaled >= total * 60 {
            ScoreTier::GoodJob
        } else if scaled >= total * 40 {
            ScoreTier::NotBad
        } else {
            ScoreTier::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent! 🎉",
            ScoreTier::GoodJob => "Good job! 👏",
            ScoreTier::NotBad => "Not bad! 👍",
            ScoreTier::KeepPracticing => "Keep practicing! 📚",
        }
    }
}
