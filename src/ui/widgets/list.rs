use crate::app::{App, ListRowHit};
use crate::components::ListItem;
use crate::ui::layout::centered_column;
use crate::ui::theme::Theme;
use crate::ui::utils::{pad, truncate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Lines per item: title, artist, spacer.
const ROW_HEIGHT: u16 = 3;
const SEQ_W: usize = 5;
const REMOVE_W: u16 = 5;

#[derive(Clone, Copy, PartialEq)]
enum RowLook {
    Normal,
    Selected,
    /// The slot the dragged item left.
    Ghost,
    /// Floating copy drawn over the hover target.
    Overlay,
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let column = centered_column(area, 50, 36);
    let theme = app.theme.clone();

    let title = format!("  DRAGGABLE LIST  ·  {} songs  ", app.list.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            title,
            Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(theme.surface))
        .style(Style::default().bg(Color::Reset));

    let inner = block.inner(column);
    f.render_widget(block, column);
    app.hits.list_area = Some(inner);

    if app.list.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Empty list", Style::default().fg(theme.overlay))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(empty, inner);
        return;
    }

    let content = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    let visible = (content.height / ROW_HEIGHT).max(1) as usize;
    let len = app.list.len();
    let start_idx = app
        .list_selected
        .saturating_sub(visible / 2)
        .min(len.saturating_sub(visible));

    let active_id = app.list.active_item().map(|item| item.id);
    let over_id = app.list.over_item().map(|item| item.id);
    let mut overlay_at: Option<Rect> = None;

    for (display_idx, item) in app.list.items().iter().enumerate().skip(start_idx).take(visible) {
        let row_area = Rect::new(
            content.x,
            content.y + ((display_idx - start_idx) as u16) * ROW_HEIGHT,
            content.width,
            ROW_HEIGHT - 1,
        );

        let look = if Some(item.id) == active_id {
            RowLook::Ghost
        } else if display_idx == app.list_selected && active_id.is_none() {
            RowLook::Selected
        } else {
            RowLook::Normal
        };
        render_row(f, row_area, item, look, &theme);

        if active_id.is_some() && Some(item.id) == over_id {
            overlay_at = Some(row_area);
        }

        let remove = Rect::new(
            row_area.right().saturating_sub(REMOVE_W),
            row_area.y,
            REMOVE_W.min(row_area.width),
            row_area.height,
        );
        app.hits.list_rows.push(ListRowHit {
            area: row_area,
            index: display_idx,
            id: item.id,
            sequence: item.sequence,
            remove,
        });
    }

    // Drag overlay: the grabbed row follows the hover target
    if let (Some(area), Some(item)) = (overlay_at, app.list.active_item()) {
        let shifted = Rect::new(
            area.x + 2,
            area.y,
            area.width.saturating_sub(2),
            area.height,
        );
        f.render_widget(Clear, shifted);
        render_row(f, shifted, item, RowLook::Overlay, &theme);
    }
}

fn render_row(f: &mut Frame, area: Rect, item: &ListItem, look: RowLook, theme: &Theme) {
    let width = area.width as usize;
    let text_w = width.saturating_sub(SEQ_W + REMOVE_W as usize + 1);

    let (bg, seq_style, title_style, artist_style) = match look {
        RowLook::Normal => (
            theme.surface,
            Style::default().fg(theme.base).bg(theme.overlay),
            Style::default().fg(theme.text),
            Style::default().fg(theme.overlay),
        ),
        RowLook::Selected => (
            theme.surface,
            Style::default().fg(theme.base).bg(theme.green),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            Style::default().fg(theme.text),
        ),
        RowLook::Ghost => (
            theme.base,
            Style::default().fg(theme.surface).bg(theme.base),
            Style::default().fg(theme.surface),
            Style::default().fg(theme.surface),
        ),
        RowLook::Overlay => (
            theme.surface,
            Style::default().fg(theme.base).bg(theme.magenta),
            Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
            Style::default().fg(theme.text),
        ),
    };

    let handle = if look == RowLook::Overlay { "✊ " } else { "" };
    let title = truncate(&format!("{}{}", handle, item.title), text_w);
    let artist = truncate(&item.artist, text_w);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:^w$}", item.sequence, w = SEQ_W), seq_style),
            Span::raw(" "),
            Span::styled(pad(&title, text_w), title_style),
            Span::styled(" [✕] ", Style::default().fg(theme.red)),
        ]),
        Line::from(vec![
            Span::styled(" ".repeat(SEQ_W), seq_style),
            Span::raw(" "),
            Span::styled(pad(&artist, text_w), artist_style),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
