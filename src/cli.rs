use std::path::PathBuf;

use clap::Parser;

use crate::session::{DEFAULT_MAX_QUESTIONS, DEFAULT_MIN_QUESTIONS, DEFAULT_SECONDS_PER_QUESTION};

#[derive(Parser, Debug)]
#[command(name = "termtrivia", version, about = "Terminal-based timed trivia quiz")]
pub struct Cli {
    /// Question bank (.yaml or .json) [default: <data dir>/termtrivia/questions.yaml]
    pub bank: Option<PathBuf>,

    /// Seconds allowed per question
    #[arg(long, default_value_t = DEFAULT_SECONDS_PER_QUESTION)]
    pub seconds: u32,

    /// Fewest questions drawn per quiz
    #[arg(long, default_value_t = DEFAULT_MIN_QUESTIONS)]
    pub min: usize,

    /// Most questions drawn per quiz
    #[arg(long, default_value_t = DEFAULT_MAX_QUESTIONS)]
    pub max: usize,

    /// Seed for question selection, for repeatable quizzes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Validate the question bank and print a summary without starting the quiz
    #[arg(long)]
    pub check: bool,

    /// Write log records to this file instead of stderr
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,
}
