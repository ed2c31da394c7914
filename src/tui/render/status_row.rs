use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Screen};

const LIST_HINTS: &str = "a add  space toggle  enter edit  q quit";
const FORM_HINTS: &str = "enter save  esc back";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (left, hint) = match &app.screen {
        Screen::List => (
            format!(" {}/{} done", app.store.done_count(), app.store.len()),
            LIST_HINTS,
        ),
        Screen::Form(form) => {
            let left = match form.editing() {
                Some(task) => format!(" editing {}", task.id()),
                None => " new task".to_string(),
            };
            (left, FORM_HINTS)
        }
    };

    let mut spans = vec![Span::styled(left, Style::default().fg(app.theme.text).bg(bg))];
    if app.show_key_hints {
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
