use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::state::*;
use crate::timer::{QuestionTimer, TimerEvent, TICK_INTERVAL};

pub fn run_tui(mut state: AppState) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let (timer_tx, timer_rx) = mpsc::channel::<TimerEvent>();
    let mut timer = QuestionTimer::new(timer_tx, TICK_INTERVAL);

    let result = main_loop(&mut terminal, &mut state, &mut timer, &timer_rx);

    timer.cancel();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    timer: &mut QuestionTimer,
    timer_rx: &mpsc::Receiver<TimerEvent>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))
            .map_err(|e| format!("Poll error: {}", e))?
        {
            match event::read().map_err(|e| format!("Read error: {}", e))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = handle_key(key, state)?;
                    apply_timer_action(timer, action);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size().unwrap_or_default();
                    let area = Rect::new(0, 0, size.width, size.height);
                    let action = handle_mouse(mouse, state, area);
                    apply_timer_action(timer, action);
                }
                _ => {}
            }
        }

        while let Ok(ev) = timer_rx.try_recv() {
            match ev {
                TimerEvent::Tick { generation } => {
                    // Stale ticks from a cancelled countdown are dropped
                    if timer.accepts(generation) {
                        let action = state.on_tick();
                        apply_timer_action(timer, action);
                    }
                }
            }
        }
    }

    Ok(())
}

pub fn apply_timer_action(timer: &mut QuestionTimer, action: TimerAction) {
    match action {
        TimerAction::Keep => {}
        TimerAction::Restart => {
            timer.start();
        }
        TimerAction::Cancel => timer.cancel(),
    }
}

pub fn handle_key(key: KeyEvent, state: &mut AppState) -> Result<TimerAction, String> {
    if state.has_dialog() {
        return handle_dialog_key(key, state);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('q') {
        state.request_quit();
        return Ok(TimerAction::Keep);
    }

    match state.screen {
        Screen::Intro => handle_intro_key(key, state),
        Screen::Playing => handle_playing_key(key, state),
        Screen::Completed => handle_completed_key(key, state),
    }
}

fn handle_intro_key(key: KeyEvent, state: &mut AppState) -> Result<TimerAction, String> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => start(state),
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            Ok(TimerAction::Keep)
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
            Ok(TimerAction::Keep)
        }
        _ => Ok(TimerAction::Keep),
    }
}

fn handle_playing_key(key: KeyEvent, state: &mut AppState) -> Result<TimerAction, String> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        if key.code == KeyCode::Char('r') {
            state.push_dialog(Dialog::ConfirmRestart);
        }
        return Ok(TimerAction::Keep);
    }

    let option_count = state
        .current_question()
        .map_or(0, |q| q.options.len());

    let action = match key.code {
        KeyCode::Up => state.move_selection(-1),
        KeyCode::Down => state.move_selection(1),
        KeyCode::Enter | KeyCode::Char(' ') => state.confirm(),
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
            TimerAction::Keep
        }
        KeyCode::Char(c) if c.is_ascii_lowercase() && ((c as u8 - b'a') as usize) < option_count => {
            state.select_option((c as u8 - b'a') as usize)
        }
        KeyCode::Char(c) if ('1'..='9').contains(&c) => {
            state.select_option((c as u8 - b'1') as usize)
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            state.request_quit();
            TimerAction::Keep
        }
        _ => TimerAction::Keep,
    };
    Ok(action)
}

fn handle_completed_key(key: KeyEvent, state: &mut AppState) -> Result<TimerAction, String> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => start(state),
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            Ok(TimerAction::Keep)
        }
        _ => Ok(TimerAction::Keep),
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) -> Result<TimerAction, String> {
    let dialog = state.top_dialog().copied();
    match dialog {
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.pop_dialog();
                state.should_quit = true;
                return Ok(TimerAction::Cancel);
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::ConfirmRestart) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.pop_dialog();
                return start(state);
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => {
                state.pop_dialog();
            }
            _ => {}
        },
        None => {}
    }
    Ok(TimerAction::Keep)
}

fn start(state: &mut AppState) -> Result<TimerAction, String> {
    state
        .start_quiz()
        .map_err(|e| format!("Cannot start quiz: {}", e))
}

fn handle_mouse(mouse: MouseEvent, state: &mut AppState, size: Rect) -> TimerAction {
    if state.screen != Screen::Playing || state.has_dialog() {
        return TimerAction::Keep;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return TimerAction::Keep;
    }

    let layout = crate::ui::layout::compute_layout(size);
    let main = layout.main;
    let (x, y) = (mouse.column, mouse.row);
    if x < main.x || x >= main.x + main.width || y < main.y || y >= main.y + main.height {
        return TimerAction::Keep;
    }

    let Some(hit_map) = crate::ui::question::compute_hit_map(state, main) else {
        return TimerAction::Keep;
    };
    let content_line = (y - main.y) as usize;

    if content_line == hit_map.action_line {
        return state.confirm();
    }
    match hit_map.option_at(content_line) {
        Some(option) => state.select_option(option),
        None => TimerAction::Keep,
    }
}
