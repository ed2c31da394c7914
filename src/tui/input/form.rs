use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};

use crate::tui::app::App;
use crate::tui::render::form_view::{field_window, form_layout};

pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        KeyCode::Esc => {
            app.close_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.form_mut() else {
        return;
    };
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('a') if ctrl => form.move_home(),
        KeyCode::Char('e') if ctrl => form.move_end(),
        KeyCode::Char('w') if ctrl => form.delete_word_back(),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => form.insert_char(c),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
            form.delete_word_back()
        }
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete(),
        KeyCode::Left => form.move_left(),
        KeyCode::Right => form.move_right(),
        KeyCode::Home => form.move_home(),
        KeyCode::End => form.move_end(),
        _ => {}
    }
}

pub(super) fn handle_form_click(app: &mut App, content: Rect, column: u16, row: u16) {
    let Some(form) = app.form() else {
        return;
    };
    let layout = form_layout(content, form.submit_label());
    let pos = Position::new(column, row);

    if layout.button.contains(pos) {
        app.submit_form();
        return;
    }

    let inner = layout.field_inner();
    if inner.contains(pos) {
        let (_, start_col) = field_window(form, inner.width);
        let col = start_col + (column - inner.x) as usize;
        if let Some(form) = app.form_mut() {
            form.move_to_col(col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{ListIntent, Screen};
    use crate::tui::render::test_helpers::{app_with_tasks, empty_app};

    const CONTENT: Rect = Rect {
        x: 0,
        y: 2,
        width: 80,
        height: 21,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_and_editing_keys() {
        let mut app = empty_app();
        app.dispatch(ListIntent::New);
        for c in "buy milk".chars() {
            handle_form_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_form_key(&mut app, ctrl('a'));
        handle_form_key(&mut app, key(KeyCode::Delete));
        handle_form_key(&mut app, key(KeyCode::Char('B')));
        handle_form_key(&mut app, ctrl('e'));
        handle_form_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.form().unwrap().buffer(), "Buy mil");

        handle_form_key(&mut app, ctrl('w'));
        assert_eq!(app.form().unwrap().buffer(), "Buy ");
    }

    #[test]
    fn unbound_ctrl_chars_are_not_inserted() {
        let mut app = empty_app();
        app.dispatch(ListIntent::New);
        handle_form_key(&mut app, ctrl('z'));
        assert_eq!(app.form().unwrap().buffer(), "");
    }

    #[test]
    fn esc_returns_without_saving() {
        let mut app = app_with_tasks(&["keep"]);
        let task = app.store.tasks()[0].clone();
        app.dispatch(ListIntent::Edit(task));
        handle_form_key(&mut app, key(KeyCode::Backspace));
        handle_form_key(&mut app, key(KeyCode::Esc));
        assert!(matches!(app.screen, Screen::List));
        assert_eq!(app.store.tasks()[0].title, "keep");
    }

    #[test]
    fn enter_on_blank_shows_alert() {
        let mut app = empty_app();
        app.dispatch(ListIntent::New);
        handle_form_key(&mut app, key(KeyCode::Char(' ')));
        handle_form_key(&mut app, key(KeyCode::Enter));
        assert!(app.alert.is_some());
        assert!(app.form().is_some());
        assert!(app.store.is_empty());
    }

    #[test]
    fn button_click_submits() {
        let mut app = empty_app();
        app.dispatch(ListIntent::New);
        app.form_mut().unwrap().insert_str("Clicked");
        // Button sits on content row 5, starting one column in
        handle_form_click(&mut app, CONTENT, 3, 7);
        assert!(matches!(app.screen, Screen::List));
        assert_eq!(app.store.tasks()[0].title, "Clicked");
    }

    #[test]
    fn field_click_moves_cursor() {
        let mut app = empty_app();
        app.dispatch(ListIntent::New);
        app.form_mut().unwrap().insert_str("hello world");
        // Field text starts at column 2, row 4
        handle_form_click(&mut app, CONTENT, 4, 4);
        assert_eq!(app.form().unwrap().cursor(), 2);
    }

    #[test]
    fn field_click_on_scrolled_wide_text() {
        let mut app = empty_app();
        app.dispatch(ListIntent::New);
        app.form_mut().unwrap().insert_str("你好世界");
        // 8-wide content gives a 4-cell field showing only `界` at column 2
        let narrow = Rect::new(0, 2, 8, 21);
        handle_form_click(&mut app, narrow, 2, 4);
        assert_eq!(app.form().unwrap().cursor(), 9);
    }

    #[test]
    fn click_elsewhere_does_nothing() {
        let mut app = empty_app();
        app.dispatch(ListIntent::New);
        app.form_mut().unwrap().insert_str("text");
        handle_form_click(&mut app, CONTENT, 60, 15);
        assert_eq!(app.form().unwrap().cursor(), 4);
        assert!(app.form().is_some());
    }
}
