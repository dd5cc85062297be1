use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::app::{App, ViewMode};

pub mod common;
pub mod list;
pub mod mouse;
pub mod sidebar;
pub mod tree;

/// Route one terminal event to the handlers.
pub fn handle_event(event: Event, app: &mut App) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app),
        Event::Mouse(mouse) => mouse::handle_mouse_events(mouse, app),
        _ => {}
    }
}

pub fn handle_key(key: KeyEvent, app: &mut App) {
    // 1. A drag in progress captures the keyboard
    if app.view_mode == ViewMode::List
        && app.list.is_dragging()
        && list::handle_drag_events(key, app)
    {
        return;
    }

    // 2. Common/Global Keys (Quit, Help, View switching)
    if common::handle_common_events(key, app) {
        return;
    }

    // 3. Context Specific Handlers
    let consumed = match app.view_mode {
        ViewMode::List => list::handle_list_events(key, app),
        ViewMode::Tree => tree::handle_tree_events(key, app),
        ViewMode::Sidebar => sidebar::handle_sidebar_events(key, app),
    };

    if !consumed {
        tracing::trace!(?key, "unbound key");
    }
}
