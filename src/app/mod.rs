pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::lyrics::{LrclibClient, LyricsCache, LyricsService};
use crate::player::{self, Playerctl};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, LyricsEvent};
use state::{AppState, FetchRequest, SettingItem, Toast, View};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Offset step for the main view keys, in milliseconds.
const OFFSET_STEP_MS: i64 = 100;
/// Offset step inside the settings menu.
const SETTINGS_OFFSET_STEP_MS: i64 = 50;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    lyrics: LyricsService,
    player: Playerctl,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf) -> anyhow::Result<Self> {
        let lyrics = LyricsService::new(
            LrclibClient::new()?,
            LyricsCache::new(cfg.paths.cache_dir.clone()),
        );
        let player = Playerctl::new(cfg.player.name.clone());

        Ok(Self {
            cfg,
            config_path,
            state: AppState::new(),
            lyrics,
            player,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone());
        player::spawn_poll_task(
            self.player.clone(),
            std::time::Duration::from_millis(self.cfg.player.poll_interval_ms.max(10)),
            tx.clone(),
        );
        info!(player = %self.cfg.player.name, "polling player");

        // First draw
        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.reduce(action);
                    }
                }
                Event::Player(ps) => {
                    if let Some(req) = self.state.apply_player_state(ps) {
                        self.spawn_lyrics_fetch(req, tx.clone());
                    }
                }
                Event::Lyrics(le) => {
                    self.state.apply_lyrics(le);
                }
            }

            if self.state.should_quit {
                break;
            }

            self.state.resync(self.cfg.sync.offset_ms);
            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        Ok(())
    }

    fn spawn_lyrics_fetch(&self, req: FetchRequest, tx: mpsc::Sender<Event>) {
        info!(artist = %req.artist, title = %req.title, "fetching lyrics");
        let service = self.lyrics.clone();
        tokio::spawn(async move {
            let FetchRequest { key, artist, title } = req;
            let ev = match service.fetch(&artist, &title).await {
                Ok(Some(timeline)) => LyricsEvent::Loaded { key, timeline },
                Ok(None) => LyricsEvent::NotFound { key },
                Err(e) => LyricsEvent::Failed {
                    key,
                    error: format!("{e:#}"),
                },
            };
            let _ = tx.send(Event::Lyrics(ev)).await;
        });
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::OpenSettings => {
                self.state.view = View::Settings;
                self.state.settings_selected = 0;
            }
            Action::CloseSettings => self.state.view = View::Main,
            Action::OffsetUp => self.cfg.sync.offset_ms += OFFSET_STEP_MS,
            Action::OffsetDown => self.cfg.sync.offset_ms -= OFFSET_STEP_MS,
            Action::SettingsUp => self.state.settings_up(),
            Action::SettingsDown => self.state.settings_down(),
            Action::SettingsActivate => match self.state.selected_setting() {
                SettingItem::Back => {
                    self.state.view = View::Main;
                    self.save_config();
                }
                item => self.toggle_setting(item),
            },
            Action::SettingsAdjust(dir) => self.adjust_setting(self.state.selected_setting(), dir),
            // Redraw happens after every event.
            Action::Resize => {}
        }
    }

    fn toggle_setting(&mut self, item: SettingItem) {
        match item {
            SettingItem::Karaoke => self.cfg.sync.karaoke = !self.cfg.sync.karaoke,
            SettingItem::DimInactive => {
                self.cfg.display.dim_inactive = !self.cfg.display.dim_inactive;
            }
            SettingItem::ShowProgress => {
                self.cfg.display.show_progress = !self.cfg.display.show_progress;
            }
            SettingItem::Theme | SettingItem::Offset | SettingItem::Back => {}
        }
    }

    fn adjust_setting(&mut self, item: SettingItem, dir: i32) {
        match item {
            SettingItem::Theme => {
                self.cfg.theme.name = tui::theme::cycle(&self.cfg.theme.name, dir).to_string();
            }
            SettingItem::Offset => {
                self.cfg.sync.offset_ms += i64::from(dir) * SETTINGS_OFFSET_STEP_MS;
            }
            _ => {}
        }
    }

    fn save_config(&mut self) {
        match crate::config::save(&self.cfg, Some(&self.config_path)) {
            Ok(()) => {
                info!(path = %self.config_path.display(), "saved config");
                self.state.toast = Some(Toast::success("Settings saved"));
            }
            Err(e) => {
                warn!("save config: {e:#}");
                self.state.toast = Some(Toast::error(format!("Save failed: {e:#}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(dir: &std::path::Path) -> App {
        let mut cfg = Config::default();
        cfg.paths.cache_dir = dir.join("cache");
        App::new(cfg, dir.join("config.toml")).unwrap()
    }

    #[test]
    fn test_offset_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.reduce(Action::OffsetUp);
        app.reduce(Action::OffsetUp);
        app.reduce(Action::OffsetDown);
        assert_eq!(app.cfg.sync.offset_ms, 100);
    }

    #[test]
    fn test_settings_adjust_and_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.reduce(Action::OpenSettings);
        assert_eq!(app.state.view, View::Settings);

        app.reduce(Action::SettingsAdjust(1));
        assert_eq!(app.cfg.theme.name, "nord");
        app.reduce(Action::SettingsAdjust(-1));
        app.reduce(Action::SettingsAdjust(-1));
        assert_eq!(app.cfg.theme.name, "arch");

        app.reduce(Action::SettingsDown);
        app.reduce(Action::SettingsAdjust(-1));
        assert_eq!(app.cfg.sync.offset_ms, -50);

        app.reduce(Action::SettingsDown);
        app.reduce(Action::SettingsActivate);
        assert!(!app.cfg.sync.karaoke);

        // Toggling has no effect on a value item.
        app.reduce(Action::SettingsUp);
        app.reduce(Action::SettingsActivate);
        assert_eq!(app.cfg.sync.offset_ms, -50);
    }

    #[test]
    fn test_escape_does_not_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.reduce(Action::OpenSettings);
        app.reduce(Action::SettingsAdjust(1));
        app.reduce(Action::CloseSettings);
        assert_eq!(app.state.view, View::Main);
        assert!(!dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_save_and_back_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.reduce(Action::OpenSettings);
        app.reduce(Action::SettingsAdjust(1));
        app.reduce(Action::SettingsUp);
        assert_eq!(app.state.selected_setting(), SettingItem::Back);
        app.reduce(Action::SettingsActivate);

        assert_eq!(app.state.view, View::Main);
        let saved = crate::config::load(Some(&dir.path().join("config.toml"))).unwrap();
        assert_eq!(saved.theme.name, "nord");
    }
}
