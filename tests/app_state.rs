use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use termtrivia::bank::QuestionBank;
use termtrivia::model::{Outcome, QuestionRecord};
use termtrivia::session::SessionConfig;
use termtrivia::state::{AppState, Dialog, Screen, TimerAction};
use termtrivia::tui::handle_key;
use termtrivia::ui::markdown::{lines_to_plain, markdown_to_lines};
use termtrivia::ui::question::{build_question_view, compute_hit_map};

fn make_state(questions: usize, seconds: u32) -> AppState {
    let bank = QuestionBank {
        title: "Test Trivia".to_string(),
        tagline: "For tests.".to_string(),
        questions: (0..questions)
            .map(|i| {
                QuestionRecord::new(format!("Question {}", i), &["Alpha", "Beta", "Gamma"], 2)
            })
            .collect(),
    };
    let config = SessionConfig {
        seconds_per_question: seconds,
        min_questions: questions,
        max_questions: questions,
    };
    AppState::new(bank, config, Some(5))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_start_enters_playing_and_starts_timer() {
    let mut state = make_state(3, 20);
    assert_eq!(state.screen, Screen::Intro);
    assert!(state.current_question().is_none());

    assert_eq!(state.start_quiz().unwrap(), TimerAction::Restart);
    assert_eq!(state.screen, Screen::Playing);
    assert!(state.started_at.is_some());
    assert_eq!(state.session.as_ref().unwrap().len(), 3);
}

#[test]
fn test_timer_actions_follow_question_lifecycle() {
    let mut state = make_state(2, 20);
    state.start_quiz().unwrap();

    // Nothing selected: submit does nothing and the countdown keeps going
    assert_eq!(state.submit(), TimerAction::Keep);
    assert_eq!(state.select_option(1), TimerAction::Keep);
    assert_eq!(state.submit(), TimerAction::Cancel);
    assert_eq!(state.session.as_ref().unwrap().score(), 1);

    assert_eq!(state.advance(), TimerAction::Restart);

    for _ in 0..19 {
        assert_eq!(state.on_tick(), TimerAction::Keep);
    }
    assert_eq!(state.on_tick(), TimerAction::Cancel);
    assert_eq!(state.on_tick(), TimerAction::Keep);

    assert_eq!(state.advance(), TimerAction::Cancel);
    assert_eq!(state.screen, Screen::Completed);
    assert!(state.finished_at.is_some());
    assert!(state.elapsed_secs().unwrap() >= 0);
}

#[test]
fn test_out_of_range_option_is_ignored() {
    let mut state = make_state(2, 20);
    state.start_quiz().unwrap();
    state.select_option(7);
    assert_eq!(state.session.as_ref().unwrap().selected_option(), None);
}

#[test]
fn test_move_selection_wraps() {
    let mut state = make_state(2, 20);
    state.start_quiz().unwrap();

    state.move_selection(-1);
    assert_eq!(state.session.as_ref().unwrap().selected_option(), Some(2));
    state.move_selection(1);
    assert_eq!(state.session.as_ref().unwrap().selected_option(), Some(0));
    state.move_selection(1);
    assert_eq!(state.session.as_ref().unwrap().selected_option(), Some(1));
}

#[test]
fn test_keys_drive_a_full_quiz() {
    let mut state = make_state(2, 20);

    assert_eq!(handle_key(key(KeyCode::Enter), &mut state).unwrap(), TimerAction::Restart);

    handle_key(key(KeyCode::Char('b')), &mut state).unwrap();
    assert_eq!(state.session.as_ref().unwrap().selected_option(), Some(1));
    assert_eq!(handle_key(key(KeyCode::Enter), &mut state).unwrap(), TimerAction::Cancel);
    assert_eq!(handle_key(key(KeyCode::Enter), &mut state).unwrap(), TimerAction::Restart);

    handle_key(key(KeyCode::Char('1')), &mut state).unwrap();
    assert_eq!(state.session.as_ref().unwrap().selected_option(), Some(0));
    handle_key(key(KeyCode::Enter), &mut state).unwrap();
    assert_eq!(
        state.session.as_ref().unwrap().current_outcome(),
        Some(Outcome::Incorrect)
    );
    assert_eq!(handle_key(key(KeyCode::Enter), &mut state).unwrap(), TimerAction::Cancel);
    assert_eq!(state.screen, Screen::Completed);
    assert_eq!(state.session.as_ref().unwrap().score(), 1);

    // Restart from the results screen
    assert_eq!(handle_key(key(KeyCode::Char('r')), &mut state).unwrap(), TimerAction::Restart);
    assert_eq!(state.screen, Screen::Playing);
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.score(), 0);
    assert!(!session.is_completed());
}

#[test]
fn test_quit_needs_confirmation_mid_quiz() {
    let mut state = make_state(2, 20);
    state.start_quiz().unwrap();

    handle_key(key(KeyCode::Char('q')), &mut state).unwrap();
    assert_eq!(state.top_dialog(), Some(&Dialog::ConfirmQuit));
    assert!(!state.should_quit);

    handle_key(key(KeyCode::Esc), &mut state).unwrap();
    assert!(!state.has_dialog());

    state.request_quit();
    assert_eq!(handle_key(key(KeyCode::Enter), &mut state).unwrap(), TimerAction::Cancel);
    assert!(state.should_quit);
}

#[test]
fn test_quit_from_intro_is_immediate() {
    let mut state = make_state(2, 20);
    handle_key(key(KeyCode::Char('q')), &mut state).unwrap();
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_r_restart_is_confirmed() {
    let mut state = make_state(3, 20);
    state.start_quiz().unwrap();
    state.select_option(1);
    state.submit();

    let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
    assert_eq!(handle_key(ctrl_r, &mut state).unwrap(), TimerAction::Keep);
    assert_eq!(state.top_dialog(), Some(&Dialog::ConfirmRestart));

    assert_eq!(handle_key(key(KeyCode::Enter), &mut state).unwrap(), TimerAction::Restart);
    assert!(!state.has_dialog());
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.score(), 0);
    assert!(!session.is_revealed());
}

#[test]
fn test_question_view_shows_feedback_after_timeout() {
    let mut state = make_state(2, 1);
    state.start_quiz().unwrap();
    state.on_tick();

    let area = Rect::new(0, 0, 80, 30);
    let view = build_question_view(&state, area).unwrap();
    let text = lines_to_plain(&view.lines).join("\n");

    assert!(text.contains("Question 1 of 2"));
    assert!(text.contains("Time's up! The correct answer is: Beta"));
    assert!(text.contains("[Enter] Next Question"));
    assert_eq!(view.hit_map.option_lines.len(), 3);
}

#[test]
fn test_hit_map_points_at_options() {
    let mut state = make_state(2, 20);
    state.start_quiz().unwrap();

    let area = Rect::new(0, 2, 80, 30);
    let hit_map = compute_hit_map(&state, area).unwrap();
    let (start, _, idx) = hit_map.option_lines[2];
    assert_eq!(idx, 2);
    assert_eq!(hit_map.option_at(start), Some(2));
    assert_eq!(hit_map.option_at(0), None);
    assert!(hit_map.action_line > start);
}

#[test]
fn test_inline_markdown_is_flattened() {
    let lines = markdown_to_lines(
        "Which planet is the **Red Planet**?",
        ratatui::style::Style::default(),
    );
    assert_eq!(lines_to_plain(&lines), vec!["Which planet is the Red Planet?".to_string()]);
}
