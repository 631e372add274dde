use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let revealed = state.session.as_ref().map_or(false, |s| s.is_revealed());

    let bindings: Vec<(&str, &str)> = if revealed {
        vec![
            ("Enter", "next"),
            ("Ctrl+R", "restart"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![
            ("a-z", "answer"),
            ("↑/↓", "change"),
            ("Enter", "submit"),
            ("Ctrl+R", "restart"),
            ("?", "help"),
            ("q", "quit"),
        ]
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
