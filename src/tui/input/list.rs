use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Position, Rect};

use crate::tui::app::{App, ListIntent};
use crate::tui::render::list_view::{CHECKBOX_COLS, list_layout};

pub(super) fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_cursor_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_cursor_bottom(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.dispatch(ListIntent::New),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_task().map(|t| t.id()) {
                app.dispatch(ListIntent::ToggleDone(id));
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(task) = app.selected_task().cloned() {
                app.dispatch(ListIntent::Edit(task));
            }
        }
        _ => {}
    }
}

/// Map a click on the list screen to an intent.
///
/// The checkbox columns of a row toggle it, the rest of the row edits it,
/// and the button creates a new task.
pub fn list_hit(app: &App, content: Rect, column: u16, row: u16) -> Option<ListIntent> {
    let layout = list_layout(content);
    let pos = Position::new(column, row);

    if layout.button.contains(pos) {
        return Some(ListIntent::New);
    }
    if !layout.rows.contains(pos) {
        return None;
    }

    let index = app.scroll + (row - layout.rows.y) as usize;
    let task = app.store.tasks().get(index)?;
    if column < layout.rows.x + CHECKBOX_COLS {
        Some(ListIntent::ToggleDone(task.id()))
    } else {
        Some(ListIntent::Edit(task.clone()))
    }
}

pub(super) fn handle_list_click(app: &mut App, content: Rect, column: u16, row: u16) {
    let layout = list_layout(content);
    if layout.rows.contains(Position::new(column, row)) {
        let index = app.scroll + (row - layout.rows.y) as usize;
        if index < app.store.len() {
            app.cursor = index;
        }
    }
    if let Some(intent) = list_hit(app, content, column, row) {
        app.dispatch(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Screen;
    use crate::tui::render::test_helpers::app_with_tasks;

    // Content area of an 80x24 terminal: rows 2..23, tasks start at row 4
    const CONTENT: Rect = Rect {
        x: 0,
        y: 2,
        width: 80,
        height: 21,
    };

    #[test]
    fn checkbox_click_toggles() {
        let app = app_with_tasks(&["a", "b"]);
        let id = app.store.tasks()[1].id();
        assert_eq!(list_hit(&app, CONTENT, 2, 5), Some(ListIntent::ToggleDone(id)));
        assert_eq!(list_hit(&app, CONTENT, 4, 5), Some(ListIntent::ToggleDone(id)));
    }

    #[test]
    fn row_click_edits() {
        let app = app_with_tasks(&["a", "b"]);
        let task = app.store.tasks()[0].clone();
        assert_eq!(list_hit(&app, CONTENT, 5, 4), Some(ListIntent::Edit(task.clone())));
        assert_eq!(list_hit(&app, CONTENT, 70, 4), Some(ListIntent::Edit(task)));
    }

    #[test]
    fn button_click_creates() {
        let app = app_with_tasks(&[]);
        assert_eq!(list_hit(&app, CONTENT, 1, 2), Some(ListIntent::New));
        assert_eq!(list_hit(&app, CONTENT, 12, 2), Some(ListIntent::New));
        assert_eq!(list_hit(&app, CONTENT, 13, 2), None);
    }

    #[test]
    fn click_below_last_row_does_nothing() {
        let app = app_with_tasks(&["a"]);
        assert_eq!(list_hit(&app, CONTENT, 10, 5), None);
        assert_eq!(list_hit(&app, CONTENT, 10, 3), None);
    }

    #[test]
    fn click_accounts_for_scroll() {
        let mut app = app_with_tasks(&["a", "b", "c", "d"]);
        app.scroll = 2;
        let task = app.store.tasks()[2].clone();
        assert_eq!(list_hit(&app, CONTENT, 10, 4), Some(ListIntent::Edit(task)));
    }

    #[test]
    fn checkbox_click_stays_on_list_and_moves_cursor() {
        let mut app = app_with_tasks(&["a", "b"]);
        handle_list_click(&mut app, CONTENT, 2, 5);
        assert!(app.store.tasks()[1].done);
        assert_eq!(app.cursor, 1);
        assert!(matches!(app.screen, Screen::List));
    }

    #[test]
    fn row_click_opens_form() {
        let mut app = app_with_tasks(&["a", "b"]);
        handle_list_click(&mut app, CONTENT, 20, 4);
        assert_eq!(app.form().unwrap().buffer(), "a");
    }

    #[test]
    fn keys_on_empty_list_are_harmless() {
        let mut app = app_with_tasks(&[]);
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Down, KeyCode::Char('G')] {
            handle_list_key(&mut app, KeyEvent::from(code));
        }
        assert!(matches!(app.screen, Screen::List));
        assert_eq!(app.cursor, 0);
    }
}
