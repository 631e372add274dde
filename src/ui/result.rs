use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;
use crate::timer::format_elapsed;
use crate::ui::ACCENT;

pub fn draw_completed(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = &state.session else {
        return;
    };
    let counts = session.outcome_counts();

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Completed!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your Final Score"),
        Line::from(Span::styled(
            format!("{}/{}", session.score(), session.len()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            session.score_message(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
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
        ]),
    ];

    if let Some(secs) = state.elapsed_secs() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Finished in {}", format_elapsed(secs)),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Restart Quiz    [q] Quit",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
