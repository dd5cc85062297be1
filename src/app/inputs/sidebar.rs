use crossterm::event::KeyEvent;

use crate::app::App;

pub fn handle_sidebar_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    if keys.matches_any(
        key,
        &[
            keys.toggle_sidebar.as_str(),
            keys.toggle_node.as_str(),
            keys.toggle_node_alt.as_str(),
        ],
    ) {
        app.toggle_sidebar();
        return true;
    }
    if keys.is_up(key) {
        app.move_nav_cursor(-1);
        return true;
    }
    if keys.is_down(key) {
        app.move_nav_cursor(1);
        return true;
    }
    // Arrows open and close the panel like the toggle button
    if (keys.is_right(key) && !app.panel.is_open()) || (keys.is_left(key) && app.panel.is_open()) {
        app.toggle_sidebar();
        return true;
    }

    false
}
