use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::{App, ViewMode};
use crate::components::DragEvent;

/// Pointer gestures, resolved against the geometry of the last frame.
pub fn handle_mouse_events(mouse: MouseEvent, app: &mut App) {
    let (column, row) = (mouse.column, mouse.row);

    match app.view_mode {
        ViewMode::List => handle_list_pointer(mouse.kind, column, row, app),
        ViewMode::Tree => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                if let Some(index) = app.hits.tree_row_at(column, row).map(|hit| hit.index) {
                    app.toggle_tree_row(index);
                }
            }
            scroll(mouse.kind, |delta| app.move_tree_cursor(delta));
        }
        ViewMode::Sidebar => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                if app.hits.on_sidebar_toggle(column, row) {
                    app.toggle_sidebar();
                } else if let Some(index) = app.hits.nav_link_at(column, row) {
                    app.nav_selected = index;
                }
            }
        }
    }
}

fn handle_list_pointer(kind: MouseEventKind, column: u16, row: u16, app: &mut App) {
    let hit = app.hits.list_row_at(column, row).cloned();

    match kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(hit) = hit else { return };
            if hit.remove.contains(Position::new(column, row)) {
                app.remove_item(hit.id);
            } else {
                app.select_list_row(hit.index);
                app.list.apply(DragEvent::Begin(hit.sequence));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !app.list.is_dragging() {
                return;
            }
            if let Some(hit) = hit {
                app.select_list_row(hit.index);
                app.list.apply(DragEvent::Over(hit.sequence));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if !app.list.is_dragging() {
                return;
            }
            let inside = app
                .hits
                .list_area
                .is_some_and(|area| area.contains(Position::new(column, row)));
            match hit {
                Some(hit) => {
                    app.drop_dragged(hit.sequence);
                }
                // Between rows: land on the last hovered one
                None if inside => {
                    app.drop_on_hover();
                }
                None => app.cancel_drag(),
            }
        }
        kind => scroll(kind, |delta| app.move_list_cursor(delta)),
    }
}

fn scroll(kind: MouseEventKind, mut step: impl FnMut(isize)) {
    match kind {
        MouseEventKind::ScrollUp => step(-1),
        MouseEventKind::ScrollDown => step(1),
        _ => {}
    }
}
