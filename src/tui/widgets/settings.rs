use crate::app::state::{AppState, SettingItem};
use crate::config::Config;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const DIALOG_WIDTH: u16 = 54;

pub fn render(frame: &mut Frame, cfg: &Config, state: &AppState, theme: &Theme, area: Rect) {
    let icons = &theme.icons;
    let height = SettingItem::ALL.len() as u16 + 6;
    let dialog = centered(area, DIALOG_WIDTH, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.primary))
        .title(format!(" {} Settings ", icons.settings))
        .title_style(
            Style::default()
                .fg(theme.palette.primary)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(dialog);
    frame.render_widget(Clear, dialog);
    frame.render_widget(block, dialog);

    let mut lines = vec![Line::default()];
    for (i, item) in SettingItem::ALL.iter().enumerate() {
        let selected = i == state.settings_selected;
        let prefix = if selected { icons.selected } else { icons.unselected };
        let text = format!("{prefix} {:<30} {}", item.label(), setting_value(cfg, *item));
        let style = if selected {
            Style::default()
                .fg(theme.palette.text)
                .bg(theme.palette.dim)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.palette.text)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Use Arrows/Enter to change. ESC to close.",
        Style::default().fg(theme.palette.dim),
    )));

    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner)[1];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), padded);
}

pub fn setting_value(cfg: &Config, item: SettingItem) -> String {
    match item {
        SettingItem::Theme => {
            let name = crate::tui::theme::get_theme(&cfg.theme.name).name;
            format!("< {} >", name.to_uppercase())
        }
        SettingItem::Offset => format!("< {} >", cfg.sync.offset_ms),
        SettingItem::Karaoke => on_off(cfg.sync.karaoke).to_string(),
        SettingItem::DimInactive => on_off(cfg.display.dim_inactive).to_string(),
        SettingItem::ShowProgress => on_off(cfg.display.show_progress).to_string(),
        SettingItem::Back => ">>".to_string(),
    }
}

fn on_off(b: bool) -> &'static str {
    if b { "[ON]" } else { "[OFF]" }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_values() {
        let mut cfg = Config::default();
        cfg.sync.offset_ms = -150;
        cfg.display.dim_inactive = false;
        assert_eq!(setting_value(&cfg, SettingItem::Theme), "< SPOTIFY >");
        assert_eq!(setting_value(&cfg, SettingItem::Offset), "< -150 >");
        assert_eq!(setting_value(&cfg, SettingItem::Karaoke), "[ON]");
        assert_eq!(setting_value(&cfg, SettingItem::DimInactive), "[OFF]");
    }

    #[test]
    fn test_centered_fits_small_area() {
        let r = centered(Rect::new(0, 0, 20, 5), DIALOG_WIDTH, 12);
        assert_eq!(r, Rect::new(0, 0, 20, 5));
        let r = centered(Rect::new(0, 0, 100, 40), 50, 10);
        assert_eq!(r, Rect::new(25, 15, 50, 10));
    }
}
