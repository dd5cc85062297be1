use crossterm::event::KeyEvent;

use crate::app::App;

pub fn handle_tree_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    if keys.is_up(key) {
        app.move_tree_cursor(-1);
        return true;
    }
    if keys.is_down(key) {
        app.move_tree_cursor(1);
        return true;
    }
    if keys.matches_any(key, &[keys.toggle_node.as_str(), keys.toggle_node_alt.as_str()]) {
        app.toggle_tree_row(app.tree_selected);
        return true;
    }
    if keys.is_right(key) {
        app.expand_selected();
        return true;
    }
    if keys.is_left(key) {
        app.collapse_or_parent();
        return true;
    }

    false
}
