use super::events::LyricsEvent;
use crate::lyrics::{Timeline, effective_time};
use crate::player::{PlaybackStatus, PlayerState};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Offset,
    Karaoke,
    DimInactive,
    ShowProgress,
    Back,
}

impl SettingItem {
    pub const ALL: [SettingItem; 6] = [
        SettingItem::Theme,
        SettingItem::Offset,
        SettingItem::Karaoke,
        SettingItem::DimInactive,
        SettingItem::ShowProgress,
        SettingItem::Back,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingItem::Theme => "Theme",
            SettingItem::Offset => "Global Offset (ms)",
            SettingItem::Karaoke => "Karaoke Mode",
            SettingItem::DimInactive => "Dim Inactive Lines",
            SettingItem::ShowProgress => "Show Progress Bar",
            SettingItem::Back => "Save & Back",
        }
    }
}

/// Where the lyrics for the current track stand.
#[derive(Debug, Clone, Default)]
pub enum LyricsStatus {
    /// Nothing playing yet
    #[default]
    Waiting,
    Loading,
    Loaded(Timeline),
    /// Fetch finished without usable lyrics
    Missing,
}

impl LyricsStatus {
    pub fn timeline(&self) -> Option<&Timeline> {
        match self {
            LyricsStatus::Loaded(t) => Some(t),
            _ => None,
        }
    }
}

/// Artist and title to fetch lyrics for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub key: String,
    pub artist: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub view: View,
    pub should_quit: bool,

    pub player: PlayerState,
    pub lyrics: LyricsStatus,
    /// Key of the track whose lyrics were last requested
    pub last_fetch_key: Option<String>,
    pub fetch_in_flight: bool,

    /// Derived each tick from the player position and offset
    pub effective_time: f64,
    pub active_idx: Option<usize>,

    pub settings_selected: usize,
    pub toast: Option<Toast>,
    pub tick: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh poll result. Returns a request when lyrics for a new
    /// track should be fetched; the previous timeline is dropped at that point.
    pub fn apply_player_state(&mut self, player: PlayerState) -> Option<FetchRequest> {
        self.player = player;
        self.tick = self.tick.wrapping_add(1);

        if self.player.status == PlaybackStatus::Stopped
            || self.player.artist.is_empty()
            || self.fetch_in_flight
        {
            return None;
        }

        let key = self.player.track_key();
        if self.last_fetch_key.as_deref() == Some(key.as_str()) {
            return None;
        }

        debug!(key = %key, "track changed");
        self.last_fetch_key = Some(key.clone());
        self.fetch_in_flight = true;
        self.lyrics = LyricsStatus::Loading;
        self.active_idx = None;

        Some(FetchRequest {
            key,
            artist: self.player.artist.clone(),
            title: self.player.title.clone(),
        })
    }

    /// Apply a finished fetch. Results for a track that is no longer current
    /// are dropped so the next tick can refetch.
    pub fn apply_lyrics(&mut self, event: LyricsEvent) {
        self.fetch_in_flight = false;

        if self.last_fetch_key.as_deref() != Some(event.key()) {
            return;
        }
        if event.key() != self.player.track_key() {
            debug!(key = event.key(), "discarding lyrics for previous track");
            self.last_fetch_key = None;
            return;
        }

        self.lyrics = match event {
            LyricsEvent::Loaded { timeline, .. } => LyricsStatus::Loaded(timeline),
            LyricsEvent::NotFound { .. } => LyricsStatus::Missing,
            LyricsEvent::Failed { error, .. } => {
                warn!("lyrics fetch failed: {error}");
                self.toast = Some(Toast::error(format!("Lyrics: {error}")));
                LyricsStatus::Missing
            }
        };
    }

    /// Recompute effective time and the active line from scratch.
    pub fn resync(&mut self, offset_ms: i64) {
        self.effective_time = effective_time(self.player.position_secs, offset_ms);
        self.active_idx = self
            .lyrics
            .timeline()
            .and_then(|t| t.active_index(self.effective_time));
    }

    pub fn selected_setting(&self) -> SettingItem {
        SettingItem::ALL[self.settings_selected % SettingItem::ALL.len()]
    }

    pub fn settings_up(&mut self) {
        let len = SettingItem::ALL.len();
        self.settings_selected = (self.settings_selected + len - 1) % len;
    }

    pub fn settings_down(&mut self) {
        self.settings_selected = (self.settings_selected + 1) % SettingItem::ALL.len();
    }
}
