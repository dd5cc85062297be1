use crate::app::App;
use crate::components::panel::CLOSED_WIDTH;
use crate::components::seed::NAV_LINKS;
use crate::ui::layout::get_sidebar_layout;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const NAV_ICONS: [&str; 5] = ["▤", "❐", "☑", "◔", "☺"];

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let width = app.sidebar_width.round() as u16;
    let layout = get_sidebar_layout(area, width, CLOSED_WIDTH);

    // Content first: the panel is drawn over it
    render_content(f, layout.content, app);
    render_panel(f, layout.panel, app);
}

fn render_panel(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.overlay))
        .style(Style::default().bg(theme.base));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Avatar on the left, toggle arrow on the right
    let arrow = app.panel.arrow_glyph();
    let toggle = Rect::new(inner.right().saturating_sub(2), inner.y, 2.min(inner.width), 1);
    if inner.width > 3 {
        f.render_widget(
            Paragraph::new(Span::styled("●", Style::default().fg(theme.peach))),
            Rect::new(inner.x + 1, inner.y, 1, 1),
        );
    }
    f.render_widget(
        Paragraph::new(Span::styled(
            arrow,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        toggle,
    );

    // Labels clip to whatever width the panel has right now
    let label_w = (inner.width as usize).saturating_sub(4);
    let mut nav_links = Vec::new();
    for (i, (name, icon)) in NAV_LINKS.iter().zip(NAV_ICONS).enumerate() {
        let y = inner.y + 3 + (i as u16) * 2;
        if y >= inner.bottom() {
            break;
        }
        let is_sel = i == app.nav_selected;
        let color = if is_sel { theme.text } else { theme.overlay };
        let label: String = name.chars().take(label_w).collect();

        let line = Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(
                label,
                if is_sel {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(color)
                },
            ),
        ]);
        let row = Rect::new(inner.x, y, inner.width, 1);
        let style = if is_sel {
            Style::default().bg(theme.surface)
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(line).style(style), row);
        nav_links.push((row, i));
    }

    app.hits.sidebar_toggle = Some(toggle);
    app.hits.nav_links = nav_links;
}

fn render_content(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(1),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Heading
            Constraint::Percentage(55), // Wide card
            Constraint::Min(0),         // Two cards
        ])
        .split(inner);

    let heading = NAV_LINKS.get(app.nav_selected).copied().unwrap_or(NAV_LINKS[0]);
    f.render_widget(
        Paragraph::new(Span::styled(
            heading,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    let card = || {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.surface))
    };

    f.render_widget(card(), rows[1]);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(rows[2]);
    f.render_widget(card(), halves[0]);
    f.render_widget(card(), halves[1]);
}
