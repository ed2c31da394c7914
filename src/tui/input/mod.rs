mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::{App, Screen};
use super::render::screen_layout;

use form::*;
use list::*;

pub use list::list_hit;

/// Handle a key event on the current screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // The alert swallows the key that dismisses it
    if app.alert.take().is_some() {
        return;
    }

    if matches!(app.screen, Screen::Form(_)) {
        handle_form_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

/// Handle a mouse event. Only left-button presses do anything.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    if app.alert.take().is_some() {
        return;
    }

    let content = screen_layout(app.viewport).content;
    if matches!(app.screen, Screen::Form(_)) {
        handle_form_click(app, content, mouse.column, mouse.row);
    } else {
        handle_list_click(app, content, mouse.column, mouse.row);
    }
}

/// Handle a bracketed paste. Only the form's text field accepts pasted text.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.alert.is_some() || text.is_empty() {
        return;
    }
    if let Some(form) = app.form_mut() {
        form.insert_str(text);
    }
}
