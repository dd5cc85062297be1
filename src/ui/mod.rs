pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::{App, ViewMode};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.hits.clear();

    // 1. Layout
    let main_layout = layout::get_main_layout(area);

    // 2. Tabs
    render_tabs(f, main_layout.header_area, app);

    // 3. Active demo
    match app.view_mode {
        ViewMode::List => widgets::list::render(f, main_layout.body_area, app),
        ViewMode::Tree => widgets::tree::render(f, main_layout.body_area, app),
        ViewMode::Sidebar => widgets::sidebar::render(f, main_layout.body_area, app),
    }

    // 4. Footer: drag status on the left, help hint on the right
    if !app.show_keyhints {
        render_footer(f, main_layout.footer_area, app);
    }

    // 5. Popups (Overlays)
    widgets::popups::render(f, app);
}

fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let theme = &app.theme;
    let views = [
        (&app.keys.view_list, ViewMode::List),
        (&app.keys.view_tree, ViewMode::Tree),
        (&app.keys.view_sidebar, ViewMode::Sidebar),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (key, view) in views {
        let active = app.view_mode == view;
        let (dot, style) = if active {
            (
                "●",
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(theme.overlay))
        };
        spans.push(Span::styled(
            format!("{} {} {}   ", dot, app.keys.display(key), view.title()),
            style,
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let theme = &app.theme;

    if let Some(active) = app.list.active_item() {
        let target = app.list.over_item().unwrap_or(active);
        let status = Line::from(vec![
            Span::styled(" ✊ ", Style::default().fg(theme.yellow)),
            Span::styled(
                format!("{}  #{} → #{}", active.title, active.sequence, target.sequence),
                Style::default().fg(theme.text),
            ),
        ]);
        f.render_widget(Paragraph::new(status), area);
    }

    let hint = Line::from(vec![
        Span::styled(
            format!(" {} ", app.keys.display(&app.keys.toggle_keyhints)),
            Style::default()
                .fg(theme.overlay)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("keys ", Style::default().fg(theme.overlay)),
    ]);
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Right), area);
}
