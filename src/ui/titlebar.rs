use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::Outcome;
use crate::state::AppState;
use crate::timer::format_seconds;
use crate::ui::LOW_TIME_SECS;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let title_text = format!("[ {} ]", state.bank.title);
    let title_span = Span::styled(
        title_text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let timer_text = match &state.session {
        Some(session) if session.current_outcome() == Some(Outcome::TimedOut) => Span::styled(
            " Time's up! ".to_string(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Some(session) => {
            let secs = session.seconds_remaining();
            let formatted = format!(" Time left: {} ", format_seconds(secs));
            if secs <= LOW_TIME_SECS && !session.is_revealed() {
                Span::styled(
                    formatted,
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(formatted, Style::default().fg(Color::Rgb(200, 200, 120)))
            }
        }
        None => Span::raw(""),
    };

    // Center the title; the timer sits flush right
    let available = area.width as usize;
    let timer_len = timer_text.width();
    let title_len = title_span.width();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + timer_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        timer_text,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
