use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::session::SessionConfig;

pub const DEFAULT_BANK_FILE: &str = "questions.yaml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bank_path: PathBuf,
    pub session: SessionConfig,
    pub seed: Option<u64>,
    pub check_only: bool,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let session = session_config(cli.seconds, cli.min, cli.max)?;
        let bank_path = match &cli.bank {
            Some(path) => path.clone(),
            None => default_bank_path().ok_or(ConfigError::NoDefaultBank)?,
        };

        Ok(Self {
            bank_path,
            session,
            seed: cli.seed,
            check_only: cli.check,
            log_file: cli.log_file.clone(),
        })
    }
}

pub fn session_config(
    seconds: u32,
    min: usize,
    max: usize,
) -> Result<SessionConfig, ConfigError> {
    if seconds == 0 {
        return Err(ConfigError::ZeroSeconds);
    }
    if min == 0 {
        return Err(ConfigError::ZeroMinimum);
    }
    if min > max {
        return Err(ConfigError::InvertedRange { min, max });
    }
    Ok(SessionConfig {
        seconds_per_question: seconds,
        min_questions: min,
        max_questions: max,
    })
}

/// `<data dir>/termtrivia/questions.yaml`, e.g. `~/.local/share/termtrivia/` on Linux.
pub fn default_bank_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "termtrivia").map(|dirs| dirs.data_dir().join(DEFAULT_BANK_FILE))
}

pub fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
