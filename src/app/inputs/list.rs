use crossterm::event::KeyEvent;

use crate::app::App;

/// Keys while a row is grabbed: the cursor becomes the hover target.
pub fn handle_drag_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    if keys.is_up(key) {
        app.move_list_cursor(-1);
        return true;
    }
    if keys.is_down(key) {
        app.move_list_cursor(1);
        return true;
    }
    if keys.matches_any(key, &[keys.drop.as_str(), keys.grab.as_str()]) {
        app.drop_on_hover();
        return true;
    }
    if keys.matches(key, &keys.cancel) {
        app.cancel_drag();
        return true;
    }
    // Row moves wait until the drop
    if keys.matches_any(key, &[keys.move_up.as_str(), keys.move_down.as_str()]) {
        return true;
    }

    false
}

pub fn handle_list_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    if keys.is_up(key) {
        app.move_list_cursor(-1);
        return true;
    }
    if keys.is_down(key) {
        app.move_list_cursor(1);
        return true;
    }

    // Reordering with J/K (Shift+j/k)
    if keys.matches(key, &keys.move_down) {
        app.shift_selected(1);
        return true;
    }
    if keys.matches(key, &keys.move_up) {
        app.shift_selected(-1);
        return true;
    }

    if keys.matches(key, &keys.grab) {
        app.grab_selected();
        return true;
    }

    if keys.matches(key, &keys.delete_item) {
        app.remove_selected();
        return true;
    }

    false
}
