use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Screen};

pub const LIST_TITLE: &str = "SimpleTask";
pub const FORM_TITLE: &str = "Add / Edit Task";

/// Render the screen title with a separator line below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = Vec::new();
    match app.screen {
        Screen::List => {
            spans.push(Span::styled(format!(" {}", LIST_TITLE), title_style));
        }
        Screen::Form(_) => {
            spans.push(Span::styled(format!(" \u{2039} {}", LIST_TITLE), dim_style));
            spans.push(Span::styled(" \u{2502} ", dim_style));
            spans.push(Span::styled(FORM_TITLE, title_style));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(separator, dim_style)),
        chunks[1],
    );
}
