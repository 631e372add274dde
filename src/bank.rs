use std::fs;
use std::path::Path;

use crate::error::BankError;
use crate::model::{BankDocument, QuestionRecord};

pub const DEFAULT_TITLE: &str = "Sentient Trivia";
pub const DEFAULT_TAGLINE: &str = "The ultimate quiz for the AGI generation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankFormat {
    Yaml,
    Json,
}

impl BankFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => BankFormat::Json,
            _ => BankFormat::Yaml,
        }
    }
}

/// The full, validated question set a quiz draws its pool from.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub title: String,
    pub tagline: String,
    pub questions: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// True when a session cannot reach `min` questions and will be clamped.
    pub fn is_undersized(&self, min: usize) -> bool {
        self.questions.len() < min
    }
}

pub fn load_bank(path: &Path) -> Result<QuestionBank, BankError> {
    let content = fs::read_to_string(path).map_err(|source| BankError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = parse_bank(&content, BankFormat::from_path(path))?;
    log::info!(
        "loaded {} questions from {}",
        bank.questions.len(),
        path.display()
    );
    Ok(bank)
}

pub fn parse_bank(content: &str, format: BankFormat) -> Result<QuestionBank, BankError> {
    let doc: BankDocument = match format {
        BankFormat::Yaml => serde_yaml::from_str(content)?,
        BankFormat::Json => serde_json::from_str(content)?,
    };

    let (title, tagline, questions) = match doc {
        BankDocument::Plain(questions) => (None, None, questions),
        BankDocument::Titled {
            title,
            tagline,
            questions,
        } => (title, tagline, questions),
    };

    validate_records(&questions)?;

    Ok(QuestionBank {
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        tagline: tagline.unwrap_or_else(|| DEFAULT_TAGLINE.to_string()),
        questions,
    })
}

/// Rejects records the quiz could never score correctly.
///
/// Indices in the returned error are 1-based, matching the order in the file.
pub fn validate_records(records: &[QuestionRecord]) -> Result<(), BankError> {
    if records.is_empty() {
        return Err(BankError::Empty);
    }

    for (i, record) in records.iter().enumerate() {
        let index = i + 1;
        if record.question.trim().is_empty() {
            return Err(BankError::Invalid {
                index,
                reason: "question text is empty".to_string(),
            });
        }
        if record.options.len() < 2 {
            return Err(BankError::Invalid {
                index,
                reason: format!(
                    "needs at least 2 options, found {}",
                    record.options.len()
                ),
            });
        }
        if record.answer == 0 || record.answer as usize > record.options.len() {
            return Err(BankError::Invalid {
                index,
                reason: format!(
                    "answer {} is outside 1..={}",
                    record.answer,
                    record.options.len()
                ),
            });
        }
    }

    Ok(())
}
