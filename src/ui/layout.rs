use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Header tabs and footer hint get one line each
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Horizontally centered column, `percent` of the width but at least `min_width`.
pub fn centered_column(area: Rect, percent: u16, min_width: u16) -> Rect {
    let width = (area.width as u32 * percent as u32 / 100) as u16;
    let width = width.max(min_width).min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

pub struct SidebarLayout {
    pub panel: Rect,
    pub content: Rect,
}

/// The panel overlays the content, which always starts after the
/// closed width so opening never reflows it.
pub fn get_sidebar_layout(area: Rect, panel_width: u16, closed_width: u16) -> SidebarLayout {
    let panel_width = panel_width.min(area.width);
    let offset = closed_width.min(area.width);

    SidebarLayout {
        panel: Rect::new(area.x, area.y, panel_width, area.height),
        content: Rect::new(
            area.x + offset,
            area.y,
            area.width - offset,
            area.height,
        ),
    }
}
