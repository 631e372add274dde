use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("cannot read question bank {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML question bank: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON question bank: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question bank is empty")]
    Empty,
    #[error("question {index}: {reason}")]
    Invalid { index: usize, reason: String },
}

/// Errors raised while turning command-line arguments into an `AppConfig`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--seconds must be at least 1")]
    ZeroSeconds,
    #[error("--min must be at least 1")]
    ZeroMinimum,
    #[error("--min ({min}) is larger than --max ({max})")]
    InvertedRange { min: usize, max: usize },
    #[error("no question bank given and no platform data directory is available")]
    NoDefaultBank,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot start a quiz without questions")]
    NoQuestions,
}
