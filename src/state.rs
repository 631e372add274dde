use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bank::QuestionBank;
use crate::error::SessionError;
use crate::model::QuestionRecord;
use crate::session::{Advance, QuizSession, SessionConfig, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Playing,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    ConfirmQuit,
    ConfirmRestart,
    Help,
}

/// What the event loop must do with the question countdown after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Keep,
    Restart,
    Cancel,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub bank: QuestionBank,
    pub config: SessionConfig,
    pub session: Option<QuizSession>,
    pub dialog_stack: Vec<Dialog>,
    pub should_quit: bool,
    pub started_at: Option<DateTime<Local>>,
    pub finished_at: Option<DateTime<Local>>,
    rng: StdRng,
}

impl AppState {
    pub fn new(bank: QuestionBank, config: SessionConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            screen: Screen::Intro,
            bank,
            config,
            session: None,
            dialog_stack: Vec::new(),
            should_quit: false,
            started_at: None,
            finished_at: None,
            rng,
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.session
            .as_ref()
            .filter(|s| !s.is_completed())
            .map(|s| s.current_question())
    }

    pub fn start_quiz(&mut self) -> Result<TimerAction, SessionError> {
        let session = match self.session.take() {
            Some(old) => old.restart(&self.bank.questions, &self.config, &mut self.rng)?,
            None => QuizSession::start(&self.bank.questions, &self.config, &mut self.rng)?,
        };
        self.session = Some(session);
        self.screen = Screen::Playing;
        self.dialog_stack.clear();
        self.started_at = Some(Local::now());
        self.finished_at = None;
        Ok(TimerAction::Restart)
    }

    pub fn restart(&mut self) -> Result<TimerAction, SessionError> {
        self.start_quiz()
    }

    pub fn select_option(&mut self, option: usize) -> TimerAction {
        let Some(session) = self.session.as_mut() else {
            return TimerAction::Keep;
        };
        if option < session.current_question().options.len() {
            session.select_option(option);
        }
        TimerAction::Keep
    }

    /// Moves the pending selection up (`-1`) or down (`+1`), wrapping around.
    pub fn move_selection(&mut self, delta: isize) -> TimerAction {
        let Some(session) = self.session.as_mut() else {
            return TimerAction::Keep;
        };
        if session.is_completed() || session.is_revealed() {
            return TimerAction::Keep;
        }
        let count = session.current_question().options.len() as isize;
        if count == 0 {
            return TimerAction::Keep;
        }
        let next = match session.selected_option() {
            Some(current) => (current as isize + delta).rem_euclid(count),
            None if delta < 0 => count - 1,
            None => 0,
        };
        session.select_option(next as usize);
        TimerAction::Keep
    }

    pub fn submit(&mut self) -> TimerAction {
        match self.session.as_mut().and_then(|s| s.submit_answer()) {
            Some(_) => TimerAction::Cancel,
            None => TimerAction::Keep,
        }
    }

    pub fn on_tick(&mut self) -> TimerAction {
        match self.session.as_mut().map(|s| s.tick()) {
            Some(Tick::Expired) => TimerAction::Cancel,
            _ => TimerAction::Keep,
        }
    }

    pub fn advance(&mut self) -> TimerAction {
        match self.session.as_mut().map(|s| s.advance()) {
            Some(Advance::Next(_)) => TimerAction::Restart,
            Some(Advance::Completed) => {
                self.screen = Screen::Completed;
                self.finished_at = Some(Local::now());
                TimerAction::Cancel
            }
            _ => TimerAction::Keep,
        }
    }

    /// Enter submits a pending answer, or moves on once the question is revealed.
    pub fn confirm(&mut self) -> TimerAction {
        let revealed = self.session.as_ref().map_or(false, |s| s.is_revealed());
        if revealed {
            self.advance()
        } else {
            self.submit()
        }
    }

    pub fn request_quit(&mut self) {
        if self.screen == Screen::Playing {
            self.push_dialog(Dialog::ConfirmQuit);
        } else {
            self.should_quit = true;
        }
    }

    pub fn elapsed_secs(&self) -> Option<i64> {
        let start = self.started_at?;
        let end = self.finished_at?;
        Some(end.signed_duration_since(start).num_seconds())
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
