//! Lyrics module for fetching and synchronizing lyrics
//!
//! This module provides:
//! - Tagged lyrics parser producing an immutable [`Timeline`]
//! - Playback mapping and karaoke word progress over a timeline
//! - LRCLIB API client and an on-disk cache of raw lyrics

pub mod cache;
pub mod lrclib;
pub mod parser;
pub mod sync;

pub use cache::LyricsCache;
pub use lrclib::LrclibClient;
pub use parser::{TimedLine, Timeline};
pub use sync::{WordState, effective_time};

use tracing::{debug, info, warn};

/// Resolves an artist and title to a parsed timeline, cache first.
#[derive(Debug, Clone)]
pub struct LyricsService {
    client: LrclibClient,
    cache: LyricsCache,
}

impl LyricsService {
    pub fn new(client: LrclibClient, cache: LyricsCache) -> Self {
        Self { client, cache }
    }

    /// Get lyrics for a track
    pub async fn fetch(&self, artist: &str, title: &str) -> anyhow::Result<Option<Timeline>> {
        let artist = artist.trim();
        let title = title.trim();

        if let Some(raw) = self.cache.load(artist, title) {
            debug!(artist, title, "lyrics cache hit");
            return Ok(Some(Timeline::parse(&raw)));
        }

        let Some(raw) = self.client.fetch_synced(artist, title).await? else {
            info!(artist, title, "no synced lyrics found");
            return Ok(None);
        };

        if let Err(e) = self.cache.store(artist, title, &raw) {
            warn!("cache lyrics: {e:#}");
        }
        Ok(Some(Timeline::parse(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens on the discard port, so any network call fails.
    fn offline_service(dir: &std::path::Path) -> LyricsService {
        let client = LrclibClient::new()
            .unwrap()
            .with_base_url("http://127.0.0.1:9/api");
        LyricsService::new(client, LyricsCache::new(dir))
    }

    #[tokio::test]
    async fn test_fetch_prefers_cache() {
        let dir = tempfile::tempdir().unwrap();
        let service = offline_service(dir.path());
        service
            .cache
            .store("A", "B", "[00:02.00]second\n[00:01.00]first")
            .unwrap();

        let timeline = service.fetch(" A ", " B ").await.unwrap().unwrap();
        let texts: Vec<&str> = timeline.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_fetch_miss_goes_to_network() {
        let dir = tempfile::tempdir().unwrap();
        let service = offline_service(dir.path());
        assert!(service.fetch("A", "Unknown").await.is_err());
        assert_eq!(service.cache.load("A", "Unknown"), None);
    }
}
