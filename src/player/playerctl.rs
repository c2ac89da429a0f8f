use super::{PlaybackStatus, PlayerState};
use anyhow::Context;
use tokio::process::Command;
use tracing::debug;

const METADATA_FORMAT: &str = "{{artist}}:::{{title}}:::{{mpris:length}}";

/// Polls an MPRIS player through the `playerctl` CLI.
#[derive(Debug, Clone)]
pub struct Playerctl {
    player: String,
}

impl Playerctl {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
        }
    }

    /// Current player state. Never fails: anything missing is left empty/zero.
    pub async fn state(&self) -> PlayerState {
        let status = match self.run(&["status"]).await {
            Ok(out) => PlaybackStatus::parse(&out),
            Err(e) => {
                debug!("playerctl status: {e:#}");
                return PlayerState::stopped();
            }
        };

        let meta = match self.run(&["metadata", "--format", METADATA_FORMAT]).await {
            Ok(out) => out,
            Err(e) => {
                debug!("playerctl metadata: {e:#}");
                return PlayerState::with_status(status);
            }
        };
        let Some((artist, title, duration_secs)) = parse_metadata(&meta) else {
            return PlayerState::with_status(status);
        };

        let position_secs = match self.run(&["position"]).await {
            Ok(out) => parse_seconds(&out),
            Err(_) => 0.0,
        };

        PlayerState {
            artist,
            title,
            status,
            position_secs,
            duration_secs,
        }
    }

    async fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let out = Command::new("playerctl")
            .arg("-p")
            .arg(&self.player)
            .args(args)
            .stdin(std::process::Stdio::null())
            .output()
            .await
            .context("run playerctl")?;
        if !out.status.success() {
            anyhow::bail!(
                "playerctl {} exited with {}: {}",
                args.join(" "),
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}

/// Split `artist:::title:::length_us`. Length is microseconds.
fn parse_metadata(raw: &str) -> Option<(String, String, f64)> {
    let parts: Vec<&str> = raw.trim().split(":::").collect();
    if parts.len() < 3 {
        return None;
    }
    let duration_secs = parse_seconds(parts[2]) / 1_000_000.0;
    Some((parts[0].to_string(), parts[1].to_string(), duration_secs))
}

fn parse_seconds(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
