use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::ACCENT;

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = &state.session else {
        return;
    };
    let counts = session.outcome_counts();

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(
                "Question {} of {}",
                session.current_index() + 1,
                session.len()
            ),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Score: {}", session.score()),
            Style::default().fg(ACCENT),
        ),
        Span::raw("   "),
        Span::styled(
            format!("✓ {} correct", counts.correct),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(
            format!("✗ {} wrong", counts.incorrect),
            Style::default().fg(Color::Red),
        ),
        Span::raw("   "),
        Span::styled(
            format!("⏱ {} timed out", counts.timed_out),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        Span::styled("[?] help", Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
