pub mod alert_popup;
pub mod form_view;
pub mod header;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Screen};

/// The three horizontal bands every screen is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Layout: header (2 rows) | content | status row (1 row)
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.viewport = area;

    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let layout = screen_layout(area);
    header::render_header(frame, app, layout.header);

    if matches!(app.screen, Screen::Form(_)) {
        form_view::render_form_view(frame, app, layout.content);
    } else {
        list_view::render_list_view(frame, app, layout.content);
    }

    status_row::render_status_row(frame, app, layout.status);

    // Alert (rendered on top of everything)
    if app.alert.is_some() {
        alert_popup::render_alert_popup(frame, app, area);
    }
}
