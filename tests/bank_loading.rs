use std::fs;
use std::path::Path;

use termtrivia::bank::{self, BankFormat, DEFAULT_TITLE};
use termtrivia::config::session_config;
use termtrivia::error::{BankError, ConfigError};

#[test]
fn test_load_titled_yaml_bank() {
    let bank = bank::load_bank(Path::new("fixtures/questions.yaml")).unwrap();

    assert_eq!(bank.title, "Sentient Trivia");
    assert_eq!(bank.tagline, "The ultimate quiz for the AGI generation.");
    assert_eq!(bank.len(), 16);

    let first = &bank.questions[0];
    assert!(first.question.contains("Red Planet"));
    assert_eq!(first.options.len(), 4);
    assert_eq!(first.answer, 2);
    assert_eq!(first.correct_index(), Some(1));
    assert_eq!(first.correct_option_text(), Some("Mars"));
    assert!(first.is_correct(1));
    assert!(!first.is_correct(2));
}

#[test]
fn test_load_plain_json_bank() {
    let bank = bank::load_bank(Path::new("fixtures/questions.json")).unwrap();

    assert_eq!(bank.title, DEFAULT_TITLE);
    assert_eq!(bank.len(), 12);
    assert_eq!(bank.questions[0].question, "What is 2 + 2?");
    assert_eq!(bank.questions[0].correct_option_text(), Some("4"));
}

#[test]
fn test_format_from_extension() {
    assert_eq!(BankFormat::from_path(Path::new("q.json")), BankFormat::Json);
    assert_eq!(BankFormat::from_path(Path::new("q.JSON")), BankFormat::Json);
    assert_eq!(BankFormat::from_path(Path::new("q.yaml")), BankFormat::Yaml);
    assert_eq!(BankFormat::from_path(Path::new("q.yml")), BankFormat::Yaml);
    assert_eq!(BankFormat::from_path(Path::new("questions")), BankFormat::Yaml);
}

#[test]
fn test_small_bank_is_undersized() {
    let bank = bank::load_bank(Path::new("fixtures/small.yaml")).unwrap();
    assert_eq!(bank.len(), 3);
    assert!(bank.is_undersized(10));
    assert!(!bank.is_undersized(3));
}

#[test]
fn test_out_of_range_answer_rejected() {
    let err = bank::load_bank(Path::new("fixtures/invalid_answer.yaml")).unwrap_err();
    match err {
        BankError::Invalid { index, reason } => {
            assert_eq!(index, 2);
            assert!(reason.contains("answer 4"), "reason: {}", reason);
        }
        other => panic!("Expected Invalid, got {:?}", other),
    }
}

#[test]
fn test_zero_answer_rejected() {
    let content = "- question: Zero?\n  options: [a, b]\n  answer: 0\n";
    let err = bank::parse_bank(content, BankFormat::Yaml).unwrap_err();
    assert!(matches!(err, BankError::Invalid { index: 1, .. }));
}

#[test]
fn test_single_option_rejected() {
    let content = r#"[{ "question": "Lonely?", "options": ["only"], "answer": 1 }]"#;
    let err = bank::parse_bank(content, BankFormat::Json).unwrap_err();
    match err {
        BankError::Invalid { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("at least 2 options"));
        }
        other => panic!("Expected Invalid, got {:?}", other),
    }
}

#[test]
fn test_blank_question_rejected() {
    let content = "- question: \"  \"\n  options: [a, b]\n  answer: 1\n";
    let err = bank::parse_bank(content, BankFormat::Yaml).unwrap_err();
    assert!(matches!(err, BankError::Invalid { index: 1, .. }));
}

#[test]
fn test_empty_bank_rejected() {
    let err = bank::parse_bank("[]", BankFormat::Json).unwrap_err();
    assert!(matches!(err, BankError::Empty));

    let err = bank::parse_bank("questions: []\n", BankFormat::Yaml).unwrap_err();
    assert!(matches!(err, BankError::Empty));
}

#[test]
fn test_malformed_documents_rejected() {
    let err = bank::parse_bank("{ not json", BankFormat::Json).unwrap_err();
    assert!(matches!(err, BankError::Json(_)));

    let err = bank::parse_bank("- question: [unclosed", BankFormat::Yaml).unwrap_err();
    assert!(matches!(err, BankError::Yaml(_)));
}

#[test]
fn test_missing_file_reports_path() {
    let err = bank::load_bank(Path::new("fixtures/does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, BankError::Read { .. }));
    assert!(err.to_string().contains("does_not_exist.yaml"));
}

#[test]
fn test_load_from_temp_file() {
    let tmp_dir = std::env::temp_dir().join("termtrivia_test_bank");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();

    let path = tmp_dir.join("bank.json");
    fs::write(
        &path,
        r#"{ "title": "Office Quiz", "questions": [
            { "question": "Coffee or tea?", "options": ["Coffee", "Tea"], "answer": 1 }
        ] }"#,
    )
    .unwrap();

    let bank = bank::load_bank(&path).unwrap();
    assert_eq!(bank.title, "Office Quiz");
    assert_eq!(bank.len(), 1);

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_session_config_validation() {
    let config = session_config(20, 10, 15).unwrap();
    assert_eq!(config.seconds_per_question, 20);
    assert_eq!(config.min_questions, 10);
    assert_eq!(config.max_questions, 15);

    assert_eq!(session_config(0, 10, 15), Err(ConfigError::ZeroSeconds));
    assert_eq!(session_config(20, 0, 15), Err(ConfigError::ZeroMinimum));
    assert_eq!(
        session_config(20, 16, 15),
        Err(ConfigError::InvertedRange { min: 16, max: 15 })
    );
    assert!(session_config(5, 3, 3).is_ok());
}
