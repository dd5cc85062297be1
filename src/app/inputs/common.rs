use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, ViewMode};

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    // Quit ('q')
    if keys.matches(key, &keys.quit) {
        // Close popups first, then quit
        if app.show_keyhints {
            app.show_keyhints = false;
        } else {
            app.is_running = false;
        }
        return true;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        app.show_keyhints = !app.show_keyhints;
        return true;
    }

    // Global Popup Close (Esc)
    if key.code == KeyCode::Esc && app.show_keyhints {
        app.show_keyhints = false;
        return true;
    }

    // View Switchers
    let target = if keys.matches(key, &keys.view_list) {
        Some(ViewMode::List)
    } else if keys.matches(key, &keys.view_tree) {
        Some(ViewMode::Tree)
    } else if keys.matches(key, &keys.view_sidebar) {
        Some(ViewMode::Sidebar)
    } else if keys.matches(key, &keys.view_next) {
        Some(app.view_mode.next())
    } else if keys.matches(key, &keys.view_prev) {
        Some(app.view_mode.prev())
    } else {
        None
    };

    if let Some(view) = target {
        app.set_view(view);
        return true;
    }

    false
}
