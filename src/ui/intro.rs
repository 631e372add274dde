use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::ACCENT;

pub fn draw_intro(f: &mut Frame, area: Rect, state: &AppState) {
    let config = &state.config;
    let available = state.bank.len();
    let min = config.min_questions.min(available);
    let max = config.max_questions.min(available);
    let per_quiz = if min == max {
        format!("{} questions", max)
    } else {
        format!("{}-{} random questions", min, max)
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            state.bank.title.clone(),
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(state.bank.tagline.clone()),
        Line::from(""),
        Line::from(format!(
            "{} per quiz, {} seconds each, drawn from {} in the bank.",
            per_quiz, config.seconds_per_question, available
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Start    [?] Help    [q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
