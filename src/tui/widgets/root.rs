//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, View};
use crate::config::Config;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::{lyrics, now_playing, settings};

/// Main layout structure:
/// ┌─────────────────────────────────────────┐
/// │          Artist - Title (header)        │
/// │                                         │
/// │              lyrics lines               │
/// │           >> active line <<             │
/// │              lyrics lines               │
/// │                                         │
/// │  ━━━━━━━━━━━━━━●─────────────────────   │
/// │    Offset: 0ms | Settings (s) | Quit    │
/// └─────────────────────────────────────────┘
/// The settings dialog is drawn centered on top when open.
pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState) {
    let theme = get_theme(&cfg.theme.name);
    let root = frame.area();

    let show_progress = cfg.display.show_progress && state.player.duration_secs > 0.0;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                   // Header
            Constraint::Length(1),                                   // Spacing
            Constraint::Min(1),                                      // Lyrics
            Constraint::Length(if show_progress { 1 } else { 0 }),   // Progress
            Constraint::Length(1),                                   // Status
        ])
        .split(root);

    now_playing::render_header(frame, state, &theme, rows[0]);
    lyrics::render(frame, cfg, state, &theme, rows[2]);
    if show_progress {
        now_playing::render_progress(frame, state, &theme, rows[3]);
    }
    now_playing::render_status(frame, cfg, state, &theme, rows[4]);

    if state.view == View::Settings {
        settings::render(frame, cfg, state, &theme, root);
    }
}
