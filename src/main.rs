use std::fs::OpenOptions;

use clap::Parser;

use termtrivia::bank::{self, QuestionBank};
use termtrivia::cli::Cli;
use termtrivia::config::{display_path, AppConfig};
use termtrivia::state::AppState;
use termtrivia::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli).map_err(|e| e.to_string())?;

    init_logging(&config)?;

    let bank = bank::load_bank(&config.bank_path).map_err(|e| e.to_string())?;

    // Undersized banks still play; every quiz just uses all of them
    if bank.is_undersized(config.session.min_questions) {
        eprintln!(
            "Warning: {} has only {} questions; each quiz needs at least {}, so all of them will be used.",
            display_path(&config.bank_path),
            bank.len(),
            config.session.min_questions
        );
        log::warn!(
            "undersized question bank: {} < {}",
            bank.len(),
            config.session.min_questions
        );
    }

    if config.check_only {
        print_summary(&bank, &config);
        return Ok(());
    }

    let state = AppState::new(bank, config.session, config.seed);
    tui::run_tui(state)
}

fn init_logging(config: &AppConfig) -> Result<(), String> {
    // The TUI owns stderr's terminal, so stay quiet there unless asked
    let default_level = if config.log_file.is_some() {
        "info"
    } else if config.check_only {
        "warn"
    } else {
        "error"
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn print_summary(bank: &QuestionBank, config: &AppConfig) {
    let session = &config.session;
    let max_options = bank
        .questions
        .iter()
        .map(|q| q.options.len())
        .max()
        .unwrap_or(0);

    println!("{}", bank.title);
    println!("  {}", bank.tagline);
    println!();
    println!("Bank:       {}", display_path(&config.bank_path));
    println!("Questions:  {} (up to {} options each)", bank.len(), max_options);
    println!(
        "Per quiz:   {}-{} questions, {}s each",
        session.min_questions.min(bank.len()),
        session.max_questions.min(bank.len()),
        session.seconds_per_question
    );
}
