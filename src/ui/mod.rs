pub mod dialog;
pub mod intro;
pub mod keybar;
pub mod layout;
pub mod markdown;
pub mod question;
pub mod result;
pub mod statusbar;
pub mod timebar;
pub mod titlebar;

use ratatui::style::Color;
use ratatui::Frame;

use crate::state::{AppState, Screen};

/// Countdown turns red at or below this many seconds.
pub const LOW_TIME_SECS: u32 = 5;

pub const ACCENT: Color = Color::Rgb(253, 104, 142);

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    match state.screen {
        Screen::Intro => {
            intro::draw_intro(f, area, state);
        }
        Screen::Playing => {
            draw_playing(f, area, state);
        }
        Screen::Completed => {
            result::draw_completed(f, area, state);
        }
    }

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}

fn draw_playing(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    timebar::draw_timebar(f, layout.timebar, state);
    question::draw_question(f, layout.main, state);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);
}
