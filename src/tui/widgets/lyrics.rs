//! Scrolling lyrics view with whole-line or karaoke highlighting

use crate::app::state::{AppState, LyricsStatus};
use crate::config::Config;
use crate::lyrics::{TimedLine, WordState};
use crate::tui::theme::{LoadingSpinner, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState, theme: &Theme, area: Rect) {
    let timeline = match &state.lyrics {
        LyricsStatus::Loaded(t) if !t.is_empty() => t,
        LyricsStatus::Loaded(_) | LyricsStatus::Missing => {
            return placeholder(frame, theme, area, "No synchronized lyrics available".into());
        }
        LyricsStatus::Loading => {
            let msg = format!(
                "{} Fetching: {} - {}...",
                LoadingSpinner::frame(state.tick),
                state.player.artist,
                state.player.title
            );
            return placeholder(frame, theme, area, msg);
        }
        LyricsStatus::Waiting => {
            return placeholder(frame, theme, area, "Waiting for playback...".into());
        }
    };

    let palette = &theme.palette;
    let active_style = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let inactive_style = if cfg.display.dim_inactive {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(palette.text)
    };

    let lines: Vec<Line> = timeline
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if state.active_idx != Some(i) {
                Line::styled(line.text.clone(), inactive_style)
            } else if line.text.is_empty() {
                Line::styled(theme.icons.music, active_style)
            } else if cfg.sync.karaoke {
                karaoke_line(line, state.effective_time, theme)
            } else {
                Line::styled(line.text.clone(), active_style)
            }
        })
        .collect();

    let offset = scroll_offset(state.active_idx, area.height as usize);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Sung words in the accent color, the rest in plain text.
fn karaoke_line(line: &TimedLine, effective_time: f64, theme: &Theme) -> Line<'static> {
    let sung = Style::default()
        .fg(theme.palette.primary)
        .add_modifier(Modifier::BOLD);
    let future = Style::default().fg(theme.palette.text);

    let mut spans = Vec::with_capacity(line.words.len() * 2);
    for (i, (word, ws)) in line
        .words
        .iter()
        .zip(line.word_states(effective_time))
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = match ws {
            WordState::Sung => sung,
            WordState::Future => future,
        };
        spans.push(Span::styled(word.clone(), style));
    }
    Line::from(spans)
}

/// Keep the active line near the middle of a view `height` rows tall.
pub fn scroll_offset(active_idx: Option<usize>, height: usize) -> usize {
    let half = height / 2;
    match active_idx {
        Some(idx) if idx > half => idx - half,
        _ => 0,
    }
}

fn placeholder(frame: &mut Frame, theme: &Theme, area: Rect, msg: String) {
    let top = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::default(); top as usize];
    lines.push(Line::styled(msg, Style::default().fg(theme.palette.dim)));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(None, 20), 0);
        assert_eq!(scroll_offset(Some(3), 20), 0);
        assert_eq!(scroll_offset(Some(10), 20), 0);
        assert_eq!(scroll_offset(Some(11), 20), 1);
        assert_eq!(scroll_offset(Some(40), 21), 30);
        assert_eq!(scroll_offset(Some(5), 0), 5);
    }

    #[test]
    fn test_karaoke_line_spans() {
        let line = TimedLine {
            start_time: 0.0,
            text: "one two three".into(),
            duration: 3.0,
            words: vec!["one".into(), "two".into(), "three".into()],
        };
        let theme = Theme::default();
        let rendered = karaoke_line(&line, 1.5, &theme);

        let text: String = rendered.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "one two three");

        let words: Vec<&Span> = rendered.spans.iter().filter(|s| s.content != " ").collect();
        assert_eq!(words[0].style.fg, Some(theme.palette.primary));
        assert_eq!(words[1].style.fg, Some(theme.palette.primary));
        assert_eq!(words[2].style.fg, Some(theme.palette.text));
    }
}
