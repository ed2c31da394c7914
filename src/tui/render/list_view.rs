use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::Task;
use crate::tui::app::App;
use crate::util::unicode;

pub const ADD_BUTTON_LABEL: &str = " + Add Task ";
pub const EMPTY_MESSAGE: &str =
    "You have no tasks yet. Press \"Add Task\" to create your first one!";
/// Leading columns of a row that belong to the checkbox (` [ ] `)
pub const CHECKBOX_COLS: u16 = 5;

/// Where the list screen puts its widgets inside the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub button: Rect,
    /// One terminal row per visible task
    pub rows: Rect,
}

/// Button on the first row, a blank row, then the task rows
pub fn list_layout(content: Rect) -> ListLayout {
    let button_w = unicode::display_width(ADD_BUTTON_LABEL) as u16;
    let button = Rect::new(content.x + 1, content.y, button_w, 1).intersection(content);
    let rows = Rect::new(
        content.x,
        content.y + 2,
        content.width,
        content.height.saturating_sub(2),
    )
    .intersection(content);
    ListLayout { button, rows }
}

/// Render the task list screen
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = list_layout(area);
    let bg = app.theme.background;

    let button_style = Style::default()
        .fg(app.theme.button_fg)
        .bg(app.theme.button_bg)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Span::styled(ADD_BUTTON_LABEL, button_style)),
        layout.button,
    );

    if app.store.is_empty() {
        let empty = Paragraph::new(format!(" {}", EMPTY_MESSAGE))
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, layout.rows);
        return;
    }

    let height = layout.rows.height as usize;
    app.scroll_to_cursor(height);

    let width = layout.rows.width as usize;
    let lines: Vec<Line> = app
        .store
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(i, task)| task_line(app, task, i == app.cursor, width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, layout.rows);
}

/// One row: ` [✓] Title`, done rows dimmed and crossed out
fn task_line(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let mut checkbox_style = Style::default()
        .fg(app.theme.checkbox_color(task.done))
        .bg(bg);
    let mut title_style = Style::default().fg(app.theme.title_color(task.done)).bg(bg);
    if task.done {
        checkbox_style = checkbox_style.add_modifier(Modifier::BOLD);
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if is_cursor {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let title_width = width.saturating_sub(CHECKBOX_COLS as usize);
    let title = unicode::truncate_to_width(&task.title, title_width);

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(task.checkbox_symbol(), checkbox_style),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(title, title_style),
    ];

    // Pad cursor line
    if is_cursor {
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        if content_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width),
                Style::default().bg(bg),
            ));
        }
    }

    Line::from(spans)
}
