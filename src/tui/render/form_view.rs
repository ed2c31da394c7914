use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::ops::form::TaskForm;
use crate::tui::app::App;
use crate::util::unicode;

pub const FIELD_LABEL: &str = "Task Title";
pub const PLACEHOLDER: &str = "e.g. Study for exam";

/// Where the form screen puts its widgets inside the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub label: Rect,
    /// Bordered text field, three rows high
    pub field: Rect,
    pub button: Rect,
}

impl FormLayout {
    /// The single editable row inside the field's border
    pub fn field_inner(&self) -> Rect {
        Block::bordered().inner(self.field)
    }
}

/// Label, field, a blank row, then the submit button
pub fn form_layout(content: Rect, submit_label: &str) -> FormLayout {
    let button_w = unicode::display_width(submit_label) as u16 + 2;
    FormLayout {
        label: Rect::new(content.x, content.y, content.width, 1).intersection(content),
        field: Rect::new(
            content.x + 1,
            content.y + 1,
            content.width.saturating_sub(2),
            3,
        )
        .intersection(content),
        button: Rect::new(content.x + 1, content.y + 5, button_w, 1).intersection(content),
    }
}

/// First visible display column of the field, so the cursor stays in view
pub fn field_scroll(form: &TaskForm, width: u16) -> usize {
    let width = width as usize;
    let cursor_col = unicode::byte_offset_to_display_col(form.buffer(), form.cursor());
    if width == 0 || cursor_col < width {
        0
    } else {
        cursor_col + 1 - width
    }
}

/// Byte offset and display column where the visible part of the field begins.
/// A wide grapheme cut by the scroll offset is skipped whole, so the window
/// always starts on a grapheme boundary.
pub fn field_window(form: &TaskForm, width: u16) -> (usize, usize) {
    let buffer = form.buffer();
    let offset = field_scroll(form, width);
    let mut start = unicode::display_col_to_byte_offset(buffer, offset);
    if unicode::byte_offset_to_display_col(buffer, start) < offset {
        start = unicode::next_grapheme_boundary(buffer, start).unwrap_or(buffer.len());
    }
    (start, unicode::byte_offset_to_display_col(buffer, start))
}

/// Render the add/edit form screen
pub fn render_form_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.form() else {
        return;
    };
    let layout = form_layout(area, form.submit_label());
    let bg = app.theme.background;

    let label_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", FIELD_LABEL), label_style)),
        layout.label,
    );

    let border_color = if app.alert.is_some() {
        app.theme.red
    } else {
        app.theme.highlight
    };
    let block = Block::bordered().border_style(Style::default().fg(border_color).bg(bg));
    let inner = block.inner(layout.field);
    frame.render_widget(block, layout.field);

    if form.buffer().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default().fg(app.theme.dim).bg(bg),
            )),
            inner,
        );
    } else {
        let (start, _) = field_window(form, inner.width);
        frame.render_widget(
            Paragraph::new(Span::styled(
                form.buffer()[start..].to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            )),
            inner,
        );
    }

    let button_style = Style::default()
        .fg(app.theme.button_fg)
        .bg(app.theme.button_bg)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", form.submit_label()),
            button_style,
        )),
        layout.button,
    );

    if app.alert.is_none() && inner.width > 0 && inner.height > 0 {
        let (_, start_col) = field_window(form, inner.width);
        let cursor_col = unicode::byte_offset_to_display_col(form.buffer(), form.cursor());
        let x = inner.x + cursor_col.saturating_sub(start_col) as u16;
        frame.set_cursor_position((x.min(inner.right() - 1), inner.y));
    }
}
