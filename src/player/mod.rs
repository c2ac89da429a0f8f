pub mod playerctl;

pub use playerctl::Playerctl;

use crate::app::events::Event;
use tokio::sync::mpsc;

/// Poll the player on a fixed interval and forward each snapshot.
/// Stops once the receiving side is gone.
pub fn spawn_poll_task(player: Playerctl, interval: std::time::Duration, tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let state = player.state().await;
            if tx.send(Event::Player(state)).await.is_err() {
                break;
            }
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    #[default]
    Stopped,
}

impl PlaybackStatus {
    /// Parse `playerctl status` output; anything unrecognized is `Stopped`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Playing" => PlaybackStatus::Playing,
            "Paused" => PlaybackStatus::Paused,
            _ => PlaybackStatus::Stopped,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
            PlaybackStatus::Stopped => "Stopped",
        }
    }
}

/// One snapshot of the media player, as polled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub artist: String,
    pub title: String,
    pub status: PlaybackStatus,
    pub position_secs: f64,
    pub duration_secs: f64,
}

impl PlayerState {
    pub fn stopped() -> Self {
        Self::default()
    }

    pub fn with_status(status: PlaybackStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Track identity; lyrics are refetched whenever this changes.
    pub fn track_key(&self) -> String {
        format!("{}|{}", self.artist, self.title)
    }
}
