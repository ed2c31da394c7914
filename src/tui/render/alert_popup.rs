use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::app::App;

const DISMISS_HINT: &str = "Press any key to continue";

/// Area of the alert box, centered in `area`
pub fn alert_area(area: Rect) -> Rect {
    let w: u16 = 40.min(area.width.saturating_sub(2));
    let h: u16 = 7.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Render the modal alert over the current screen
pub fn render_alert_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(alert) = &app.alert else {
        return;
    };
    let popup = alert_area(area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let lines = vec![
        Line::from(Span::styled(format!(" {}", alert.title), title_style)),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", alert.message), text_style)),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", DISMISS_HINT), dim_style)),
    ];

    let block = Block::bordered()
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
