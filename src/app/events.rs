use crate::lyrics::Timeline;
use crate::player::PlayerState;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Player(PlayerState),
    Lyrics(LyricsEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Resize,
}

/// Outcome of a lyrics fetch, tagged with the track key it was started for.
#[derive(Debug, Clone)]
pub enum LyricsEvent {
    Loaded { key: String, timeline: Timeline },
    NotFound { key: String },
    Failed { key: String, error: String },
}

impl LyricsEvent {
    pub fn key(&self) -> &str {
        match self {
            LyricsEvent::Loaded { key, .. }
            | LyricsEvent::NotFound { key }
            | LyricsEvent::Failed { key, .. } => key,
        }
    }
}
