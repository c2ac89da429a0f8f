//! Header, progress bar and status line around the lyrics view

use super::truncate_str;
use crate::app::state::{AppState, ToastKind};
use crate::config::Config;
use crate::player::PlaybackStatus;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// ` artist - title ` on the accent color across the full width.
pub fn render_header(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let player = &state.player;
    let label = if player.status == PlaybackStatus::Stopped && player.title.is_empty() {
        format!(" {} ", player.status.label())
    } else {
        format!(" {} - {} ", player.artist, player.title)
    };

    let header = Paragraph::new(truncate_str(&label, area.width as usize))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.palette.bg)
                .bg(theme.palette.primary)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(header, area);
}

pub fn render_progress(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let ratio = progress_ratio(state.player.position_secs, state.player.duration_secs);
    let bar = render_progress_bar(area.width.saturating_sub(4) as usize, ratio, &theme.icons);
    let line = Line::from(Span::styled(bar, Style::default().fg(theme.palette.primary)));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Offset and key hints, or the current toast while it lasts.
pub fn render_status(frame: &mut Frame, cfg: &Config, state: &AppState, theme: &Theme, area: Rect) {
    let line = match &state.toast {
        Some(toast) if !toast.is_expired() => {
            let color = match toast.kind {
                ToastKind::Success => theme.palette.primary,
                ToastKind::Error => theme.palette.text,
            };
            Line::from(Span::styled(
                truncate_str(&toast.message, area.width as usize),
                Style::default().fg(color),
            ))
        }
        _ => Line::from(Span::styled(
            format!(
                "Offset: {}ms | Settings (s) | Quit (q)",
                cfg.sync.offset_ms
            ),
            Style::default().fg(theme.palette.dim),
        )),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn progress_ratio(position_secs: f64, duration_secs: f64) -> f64 {
    if duration_secs > 0.0 {
        (position_secs / duration_secs).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Renders a modern progress bar
fn render_progress_bar(width: usize, ratio: f64, icons: &Icons) -> String {
    if width < 3 {
        return String::new();
    }

    let filled = ((width - 1) as f64 * ratio).round() as usize;
    let empty = width.saturating_sub(filled + 1);

    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push_str(icons.progress_full);
    }
    bar.push_str(icons.progress_head);
    for _ in 0..empty {
        bar.push_str(icons.progress_empty);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio() {
        assert_eq!(progress_ratio(30.0, 0.0), 0.0);
        assert_eq!(progress_ratio(30.0, 120.0), 0.25);
        assert_eq!(progress_ratio(130.0, 120.0), 1.0);
        assert_eq!(progress_ratio(-2.0, 120.0), 0.0);
    }

    #[test]
    fn test_progress_bar_width() {
        let icons = Icons::unicode();
        assert_eq!(render_progress_bar(2, 0.5, &icons), "");
        assert_eq!(render_progress_bar(5, 0.0, &icons), "●────");
        assert_eq!(render_progress_bar(5, 1.0, &icons), "━━━━●");
        assert_eq!(render_progress_bar(5, 0.5, &icons).chars().count(), 5);
    }
}
