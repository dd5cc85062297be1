use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const SLIDE: Duration = Duration::from_millis(300);

/// Horizontal offset of a toast `width` columns wide: slides in from the
/// right edge, holds, then slides back out before its deadline.
pub fn slide_offset(since_start: Duration, until_deadline: Duration, width: u16) -> u16 {
    let eased = if since_start < SLIDE {
        // Entrance: cubic out
        let t = since_start.as_secs_f32() / SLIDE.as_secs_f32();
        (1.0 - t).powi(3)
    } else if until_deadline < SLIDE {
        // Exit: cubic in
        let t = 1.0 - until_deadline.as_secs_f32() / SLIDE.as_secs_f32();
        t.powi(3)
    } else {
        0.0
    };
    (width as f32 * eased) as u16
}

pub fn render(f: &mut Frame, app: &App) {
    let Some(ref toast) = app.toast else {
        return;
    };
    let theme = &app.theme;
    let screen = f.area();
    let now = Instant::now();

    // Auto-dismiss handled in App::on_tick()
    let width = (toast.message.width() as u16 + 6).min(screen.width.saturating_sub(4));
    let x = screen.width.saturating_sub(width + 1)
        + slide_offset(
            now.duration_since(toast.start_time),
            toast.deadline.saturating_duration_since(now),
            width,
        );
    if x >= screen.width {
        return;
    }

    // Top-right, below the tab bar; clipped so a sliding toast never overflows
    let area = Rect::new(x, 1, width, 3).intersection(screen);
    if area.is_empty() {
        return;
    }

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));
    let text = Paragraph::new(Span::styled(
        toast.message.as_str(),
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(text, area);
}
