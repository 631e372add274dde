use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Gauge;
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::{ACCENT, LOW_TIME_SECS};

pub fn draw_timebar(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = &state.session else {
        return;
    };

    let total = session.seconds_per_question().max(1);
    let remaining = session.seconds_remaining().min(total);
    let ratio = remaining as f64 / total as f64;

    let color = if remaining <= LOW_TIME_SECS {
        Color::Red
    } else {
        ACCENT
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Rgb(40, 40, 40)))
        .ratio(ratio)
        .label("");
    f.render_widget(gauge, area);
}
