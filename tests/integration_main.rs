use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};
use vitrine::app::config::UserConfig;
use vitrine::app::inputs::handle_event;
use vitrine::app::{App, ViewMode};
use vitrine::components::NodePath;
use vitrine::ui;

/// Helper to create a test app instance
fn create_test_app() -> App {
    App::new(&UserConfig::default())
}

fn press(app: &mut App, code: KeyCode) {
    handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), app);
}

fn press_shift(app: &mut App, ch: char) {
    handle_event(Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::SHIFT)), app);
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    handle_event(
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }),
        app,
    );
}

fn draw(app: &mut App) {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| ui::ui(f, app)).unwrap();
}

fn titles(app: &App) -> Vec<&str> {
    app.list.items().iter().map(|item| item.title.as_str()).collect()
}

fn sequences(app: &App) -> Vec<u32> {
    app.list.items().iter().map(|item| item.sequence).collect()
}

#[test]
fn test_app_initialization() {
    let app = create_test_app();
    assert!(app.is_running);
    assert_eq!(app.view_mode, ViewMode::List);
    assert_eq!(sequences(&app), vec![1, 2, 3, 4, 5]);
    assert!(!app.list.is_dragging());
    assert!(!app.panel.is_open());
}

#[test]
fn test_keyboard_drag_moves_first_song_to_fourth() {
    let mut app = create_test_app();

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.list.active_item().map(|i| i.title.as_str()), Some("Hey Jude"));

    for _ in 0..3 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.list.over_item().map(|i| i.sequence), Some(4));

    press(&mut app, KeyCode::Enter);

    assert_eq!(
        titles(&app),
        vec![
            "My My, Hey Hey",
            "Wild Horses",
            "Ten Years Gone",
            "Hey Jude",
            "Magic Power"
        ]
    );
    assert_eq!(sequences(&app), vec![1, 2, 3, 4, 5]);
    assert!(!app.list.is_dragging());
    assert_eq!(app.list_selected, 3);
}

#[test]
fn test_escape_cancels_drag_without_moving() {
    let mut app = create_test_app();
    let before = app.list.snapshot();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Esc);

    assert!(!app.list.is_dragging());
    assert_eq!(app.list.snapshot(), before);
    assert!(app.toast.is_some());
}

#[test]
fn test_shift_moves_and_delete() {
    let mut app = create_test_app();

    // Magic Power up one slot
    app.list_selected = 4;
    press_shift(&mut app, 'k');
    assert_eq!(titles(&app)[3], "Magic Power");
    assert_eq!(app.list_selected, 3);

    // Back down
    press_shift(&mut app, 'j');
    assert_eq!(titles(&app)[4], "Magic Power");

    // Remove Wild Horses
    app.list_selected = 2;
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(
        titles(&app),
        vec!["Hey Jude", "My My, Hey Hey", "Ten Years Gone", "Magic Power"]
    );
    assert_eq!(sequences(&app), vec![1, 2, 3, 4]);
}

#[test]
fn test_shift_keys_ignored_while_dragging() {
    let mut app = create_test_app();
    let before = app.list.snapshot();

    press(&mut app, KeyCode::Char(' '));
    press_shift(&mut app, 'j');

    // Neither a row move nor a hover move
    assert!(app.list.is_dragging());
    assert_eq!(app.list.over_item().map(|i| i.sequence), Some(1));
    assert_eq!(app.list_selected, 0);
    assert_eq!(app.list.snapshot().items, before.items);
}

#[test]
fn test_tree_toggle_restores_descendants() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.view_mode, ViewMode::Tree);
    assert_eq!(app.tree_rows().len(), 1);

    // Home, then Movies
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    let expanded_rows = app.tree_rows().len();
    assert!(app.tree_expansion.is_expanded(&NodePath::from(vec![0, 0])));

    // Close and reopen Home: Movies keeps its own state
    app.tree_selected = 0;
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.tree_rows().len(), 1);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.tree_rows().len(), expanded_rows);

    // passwords.txt is a leaf
    let leaf = app
        .tree_rows()
        .iter()
        .position(|row| row.name == "passwords.txt")
        .unwrap();
    let before = app.tree_expansion.snapshot();
    app.tree_selected = leaf;
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.tree_expansion.snapshot(), before);
}

#[test]
fn test_sidebar_toggle_and_views() {
    let mut app = create_test_app();

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.view_mode, ViewMode::Sidebar);

    press(&mut app, KeyCode::Char('s'));
    assert!(app.panel.is_open());
    press(&mut app, KeyCode::Char('s'));
    assert!(!app.panel.is_open());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view_mode, ViewMode::List);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.view_mode, ViewMode::Sidebar);
}

#[test]
fn test_quit_closes_help_first() {
    let mut app = create_test_app();

    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_keyhints);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.show_keyhints);
    assert!(app.is_running);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.is_running);
}

#[test]
fn test_mouse_drag_over_rows() {
    let mut app = create_test_app();
    draw(&mut app);

    let rows = app.hits.list_rows.clone();
    assert_eq!(rows.len(), 5);
    let (first, last) = (&rows[0], &rows[4]);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), first.area.x + 2, first.area.y);
    assert!(app.list.is_dragging());
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), last.area.x + 2, last.area.y);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), last.area.x + 2, last.area.y);

    assert_eq!(titles(&app)[4], "Hey Jude");
    assert_eq!(sequences(&app), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_mouse_release_outside_list_cancels() {
    let mut app = create_test_app();
    draw(&mut app);
    let first = app.hits.list_rows[0].clone();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), first.area.x + 2, first.area.y);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 0, 0);

    assert!(!app.list.is_dragging());
    assert_eq!(titles(&app)[0], "Hey Jude");
}

#[test]
fn test_mouse_remove_button() {
    let mut app = create_test_app();
    draw(&mut app);
    let second = app.hits.list_rows[1].clone();

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), second.remove.x, second.remove.y);

    assert_eq!(app.list.len(), 4);
    assert!(!titles(&app).contains(&"My My, Hey Hey"));
    assert!(!app.list.is_dragging());
}

#[test]
fn test_mouse_tree_and_sidebar_clicks() {
    let mut app = create_test_app();

    app.set_view(ViewMode::Tree);
    draw(&mut app);
    let home = app.hits.tree_rows[0].clone();
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), home.area.x, home.area.y);
    assert!(app.tree_rows().len() > 1);

    app.set_view(ViewMode::Sidebar);
    draw(&mut app);
    let toggle = app.hits.sidebar_toggle.unwrap();
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), toggle.x, toggle.y);
    assert!(app.panel.is_open());
}

#[test]
fn test_snapshot_serializes() {
    let mut app = create_test_app();
    app.toggle_sidebar();
    app.toggle_tree_row(0);

    let json = serde_json::to_value(app.snapshot()).unwrap();
    assert_eq!(json["sidebar_open"], true);
    assert_eq!(json["list"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(json["tree_expanded"].as_array().unwrap().len(), 1);
}
