use super::Config;
use std::path::PathBuf;

pub const THEME: &str = "spotify";
pub const PLAYER: &str = "spotify";
pub const POLL_INTERVAL_MS: u64 = 100;

pub fn cache_dir() -> PathBuf {
    super::project_dirs()
        .map(|p| p.cache_dir().join("lyrics"))
        .unwrap_or_else(|| std::env::temp_dir().join("lyriterm").join("lyrics"))
}

pub fn defaults() -> Config {
    Config::default()
}
