use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::Outcome;
use crate::session::QuizSession;
use crate::state::AppState;
use crate::ui::markdown::markdown_to_lines;
use crate::ui::ACCENT;

/// Maps content lines to clickable elements for mouse handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionHitMap {
    /// (first_line, end_line_exclusive, option_index) for each option.
    pub option_lines: Vec<(usize, usize, usize)>,
    pub action_line: usize,
    /// Content lines hidden above the visible area.
    pub scroll: usize,
}

impl QuestionHitMap {
    pub fn option_at(&self, content_line: usize) -> Option<usize> {
        self.option_lines
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&content_line))
            .map(|(_, _, idx)| *idx)
    }
}

pub struct QuestionView {
    pub lines: Vec<Line<'static>>,
    pub hit_map: QuestionHitMap,
}

/// Hit map for the question as drawn in `area`. Rows are relative to the
/// top of `area`, with scroll already applied.
pub fn compute_hit_map(state: &AppState, area: Rect) -> Option<QuestionHitMap> {
    let view = build_question_view(state, area)?;
    let mut hit_map = view.hit_map;
    let scroll = hit_map.scroll;
    for (start, end, _) in hit_map.option_lines.iter_mut() {
        *start = start.saturating_sub(scroll);
        *end = end.saturating_sub(scroll);
    }
    hit_map.action_line = hit_map.action_line.saturating_sub(scroll);
    Some(hit_map)
}

pub fn build_question_view(state: &AppState, area: Rect) -> Option<QuestionView> {
    let session = state.session.as_ref().filter(|s| !s.is_completed())?;
    let question = session.current_question();
    let width = area.width as usize;

    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("  Question {} of {}", session.current_index() + 1, session.len()),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    // Prompt
    let prompt_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let wrap_width = width.saturating_sub(4);
    for line in markdown_to_lines(&question.question, prompt_style) {
        for wline in wrap_styled_line(line, wrap_width) {
            lines.push(indent(wline, 2));
        }
    }
    lines.push(Line::from(""));

    // Options
    let mut option_lines: Vec<(usize, usize, usize)> = Vec::new();
    for (i, option) in question.options.iter().enumerate() {
        let (marker, style, suffix) = option_look(session, i);
        let letter = char::from(b'A' + (i % 26) as u8);

        let prefix = format!("  {} {}. ", marker, letter);
        let prefix_len = prefix.chars().count();
        let text_width = width.saturating_sub(prefix_len + 2);
        let wrapped = wrap_text(&format!("{}{}", option, suffix), text_width);

        let start = lines.len();
        for (li, wline) in wrapped.into_iter().enumerate() {
            let lead = if li == 0 {
                prefix.clone()
            } else {
                " ".repeat(prefix_len)
            };
            lines.push(Line::from(vec![
                Span::styled(lead, style),
                Span::styled(wline, style),
            ]));
        }
        option_lines.push((start, lines.len(), i));
    }
    lines.push(Line::from(""));

    // Feedback
    if let Some(outcome) = session.current_outcome() {
        let correct_text = question
            .correct_option_text()
            .unwrap_or("(not available)");
        let (text, style) = match outcome {
            Outcome::Correct => (
                "✓ Correct! Well done! 🎉".to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Outcome::Incorrect => (
                format!("✗ Incorrect. The correct answer is: {}", correct_text),
                Style::default().fg(Color::Red),
            ),
            Outcome::TimedOut => (
                format!("⏱ Time's up! The correct answer is: {}", correct_text),
                Style::default().fg(Color::Red),
            ),
        };
        for wline in wrap_text(&text, wrap_width) {
            lines.push(Line::from(Span::styled(format!("  {}", wline), style)));
        }
        lines.push(Line::from(""));
    }

    // Action
    let action_line = lines.len();
    lines.push(action_hint(session, question.options.len()));

    let visible = area.height as usize;
    let scroll = lines.len().saturating_sub(visible);

    Some(QuestionView {
        lines,
        hit_map: QuestionHitMap {
            option_lines,
            action_line,
            scroll,
        },
    })
}

fn option_look(session: &QuizSession, i: usize) -> (&'static str, Style, &'static str) {
    let selected = session.selected_option() == Some(i);
    let marker = if selected { "(●)" } else { "( )" };

    if !session.is_revealed() {
        let style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        return (marker, style, "");
    }

    if session.current_question().is_correct(i) {
        (
            marker,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            "  ✓",
        )
    } else if selected {
        (marker, Style::default().fg(Color::Red), "  ✗")
    } else {
        (marker, Style::default().fg(Color::DarkGray), "")
    }
}

fn action_hint(session: &QuizSession, option_count: usize) -> Line<'static> {
    if session.is_revealed() {
        let label = if session.is_last_question() {
            "  [Enter] Finish Quiz"
        } else {
            "  [Enter] Next Question"
        };
        return Line::from(Span::styled(
            label,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }

    if session.selected_option().is_some() {
        Line::from(Span::styled(
            "  [Enter] Submit Answer",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    } else {
        let last = char::from(b'a' + (option_count.saturating_sub(1) % 26) as u8);
        Line::from(Span::styled(
            format!("  Pick an answer (a-{})", last),
            Style::default().fg(Color::DarkGray),
        ))
    }
}

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(view) = build_question_view(state, area) else {
        let p = Paragraph::new("No question").block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    };

    let display_lines: Vec<Line> = view
        .lines
        .into_iter()
        .skip(view.hit_map.scroll)
        .collect();
    f.render_widget(Paragraph::new(display_lines), area);
}

fn indent(line: Line<'static>, width: usize) -> Line<'static> {
    Line::from(
        std::iter::once(Span::raw(" ".repeat(width)))
            .chain(line.spans)
            .collect::<Vec<_>>(),
    )
}

/// Wrap a styled Line at `width`, preserving span styles across breaks.
fn wrap_styled_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line];
    }

    let total_width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
    if total_width <= width {
        return vec![line];
    }

    // Flatten into (char, style) pairs
    let mut chars: Vec<(char, Style)> = Vec::new();
    for span in &line.spans {
        for c in span.content.chars() {
            chars.push((c, span.style));
        }
    }

    let mut result: Vec<Line<'static>> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars.len() - pos <= width {
            result.push(styled_chars_to_line(&chars[pos..]));
            break;
        }

        let chunk_end = pos + width;
        let break_at = if chars[chunk_end].0 == ' ' {
            chunk_end
        } else if let Some(sp) = chars[pos..chunk_end].iter().rposition(|(c, _)| *c == ' ') {
            if sp > 0 {
                pos + sp
            } else {
                chunk_end
            }
        } else {
            chunk_end
        };

        result.push(styled_chars_to_line(&chars[pos..break_at]));
        pos = break_at;
        if pos < chars.len() && chars[pos].0 == ' ' {
            pos += 1;
        }
    }

    if result.is_empty() {
        result.push(Line::from(""));
    }

    result
}

/// Rebuild a Line from (char, style) pairs, grouping consecutive same-style chars into spans.
fn styled_chars_to_line(chars: &[(char, Style)]) -> Line<'static> {
    if chars.is_empty() {
        return Line::from("");
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current_text = String::new();
    let mut current_style = chars[0].1;

    for &(c, style) in chars {
        if style != current_style && !current_text.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
        }
        current_style = style;
        current_text.push(c);
    }
    if !current_text.is_empty() {
        spans.push(Span::styled(current_text, current_style));
    }

    Line::from(spans)
}

/// Wrap text to fit within `width` columns, breaking at word boundaries.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}
