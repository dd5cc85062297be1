use crate::app::{App, TreeRowHit};
use crate::components::NodeKind;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let rows = app.tree_rows();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            "  FILE TREE  ",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.surface))
        .style(Style::default().bg(Color::Reset));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let content_h = inner.height.saturating_sub(1) as usize;
    let start_idx = app
        .tree_selected
        .saturating_sub(content_h / 2)
        .min(rows.len().saturating_sub(content_h));

    let mut lines: Vec<Line> = vec![Line::from("")];

    for (idx, row) in rows.iter().enumerate().skip(start_idx).take(content_h) {
        let is_sel = idx == app.tree_selected;
        let indent = "   ".repeat(row.depth);

        // Chevron only where there is something to reveal
        let (chevron, icon, icon_color) = match row.kind {
            NodeKind::Folder {
                has_children: true,
                expanded,
            } => (if expanded { "▾ " } else { "▸ " }, "📁 ", theme.blue),
            NodeKind::Folder { .. } => ("  ", "📁 ", theme.blue),
            NodeKind::File => ("  ", "📄 ", theme.overlay),
        };

        let name_w = (inner.width as usize).saturating_sub(indent.len() + 8);
        let name_style = if is_sel {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        let line = Line::from(vec![
            Span::styled(
                if is_sel { " ▌" } else { "  " },
                Style::default().fg(theme.yellow),
            ),
            Span::raw(indent),
            Span::styled(chevron, Style::default().fg(theme.overlay)),
            Span::styled(icon, Style::default().fg(icon_color)),
            Span::styled(truncate(&row.name, name_w), name_style),
        ]);
        lines.push(if is_sel {
            line.style(Style::default().bg(theme.surface))
        } else {
            line
        });

        let y = inner.y + 1 + (idx - start_idx) as u16;
        app.hits.tree_rows.push(TreeRowHit {
            area: Rect::new(inner.x, y, inner.width, 1),
            index: idx,
            path: row.path.clone(),
        });
    }

    f.render_widget(Paragraph::new(lines), inner);
}
