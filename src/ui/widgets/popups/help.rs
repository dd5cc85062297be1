use crate::app::{App, ViewMode};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

type KeyRows = Vec<(String, &'static str)>;

/// (key, description) rows for the current view, then the global rows.
pub fn keyhints(app: &App) -> (&'static str, KeyRows, KeyRows) {
    let k = &app.keys;
    let pair = |a: &str, b: &str| format!("{}/{}", k.display(a), k.display(b));

    let (title, keys) = match app.view_mode {
        ViewMode::List => (
            "List",
            vec![
                (pair(&k.nav_down, &k.nav_up), "Select / hover"),
                (k.display(&k.grab), "Grab row"),
                (k.display(&k.drop), "Drop row"),
                (k.display(&k.cancel), "Cancel drag"),
                (pair(&k.move_down, &k.move_up), "Move row"),
                (k.display(&k.delete_item), "Remove row"),
            ],
        ),
        ViewMode::Tree => (
            "Tree",
            vec![
                (pair(&k.nav_down, &k.nav_up), "Select"),
                (pair(&k.toggle_node, &k.toggle_node_alt), "Open / close"),
                (k.display(&k.nav_right), "Open folder"),
                (k.display(&k.nav_left), "Close / parent"),
            ],
        ),
        ViewMode::Sidebar => (
            "Sidebar",
            vec![
                (k.display(&k.toggle_sidebar), "Toggle panel"),
                (pair(&k.nav_down, &k.nav_up), "Select link"),
            ],
        ),
    };

    let global = vec![
        (
            format!(
                "{}{}{}",
                k.display(&k.view_list),
                k.display(&k.view_tree),
                k.display(&k.view_sidebar)
            ),
            "Switch view",
        ),
        (pair(&k.view_next, &k.view_prev), "Next / prev view"),
        (k.display(&k.toggle_keyhints), "This help"),
        (k.display(&k.quit), "Quit"),
    ];

    (title, keys, global)
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let (title, keys, global_keys) = keyhints(app);

    let row = |key: &str, desc: &'static str, color: Color| {
        Line::from(vec![
            Span::styled(
                format!(" {:<9} ", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(theme.text)),
        ])
    };

    let mut lines: Vec<Line> = keys
        .iter()
        .map(|(key, desc)| row(key.as_str(), *desc, theme.yellow))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "────── Global ──────",
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        global_keys
            .iter()
            .map(|(key, desc)| row(key.as_str(), *desc, theme.green)),
    );

    // Fit content exactly 📏
    let content_width = keys
        .iter()
        .chain(global_keys.iter())
        .map(|(k, d)| 2 + k.width().max(9) + d.width())
        .max()
        .unwrap_or(20)
        .max(22);

    let screen = f.area();
    let popup_height = (lines.len() as u16 + 2).min(screen.height.saturating_sub(2));
    let popup_width = (content_width as u16 + 4).min(screen.width.saturating_sub(2));

    // Bottom-right, above the footer
    let popup_area = Rect::new(
        screen.width.saturating_sub(popup_width + 1),
        screen.height.saturating_sub(popup_height + 1),
        popup_width,
        popup_height,
    );

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::UserConfig;

    #[test]
    fn test_hints_follow_view_and_config() {
        let mut config = UserConfig::default();
        config.keys.delete_item = "x".to_string();
        let mut app = App::new(&config);

        let (title, keys, global) = keyhints(&app);
        assert_eq!(title, "List");
        assert!(keys.iter().any(|(k, d)| k == "x" && *d == "Remove row"));
        assert!(global.iter().any(|(k, _)| k == "123"));

        app.view_mode = ViewMode::Tree;
        let (title, keys, _) = keyhints(&app);
        assert_eq!(title, "Tree");
        assert!(keys.iter().any(|(k, _)| k == "Enter/Space"));
    }
}
