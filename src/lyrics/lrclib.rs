//! LRCLIB API client
//!
//! LRCLIB is a free lyrics API that provides synchronized (LRC format) lyrics.
//! API Documentation: https://lrclib.net/docs

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

/// LRCLIB API response
#[derive(Debug, Deserialize, Clone)]
pub struct LrclibResponse {
    #[serde(rename = "syncedLyrics")]
    pub synced_lyrics: Option<String>,
}

impl LrclibResponse {
    fn into_synced(self) -> Option<String> {
        self.synced_lyrics.filter(|s| !s.trim().is_empty())
    }
}

/// LRCLIB API client
#[derive(Debug, Clone)]
pub struct LrclibClient {
    client: reqwest::Client,
    base_url: String,
}

impl LrclibClient {
    const DEFAULT_BASE_URL: &'static str = "https://lrclib.net/api";
    const USER_AGENT: &'static str = concat!("lyriterm/", env!("CARGO_PKG_VERSION"));

    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .context("create http client")?;
        Ok(Self {
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Get raw synced lyrics for a track, `None` if LRCLIB has none.
    pub async fn fetch_synced(&self, artist: &str, title: &str) -> anyhow::Result<Option<String>> {
        let track = clean_title(title);

        // First try the "get" endpoint with exact match
        match self.get_exact(track, artist).await {
            Ok(Some(lrc)) => return Ok(Some(lrc)),
            Ok(None) => {}
            Err(e) => debug!("lrclib exact lookup failed: {e:#}"),
        }

        // Fall back to search
        self.search(track, artist).await
    }

    async fn get_exact(&self, track_name: &str, artist_name: &str) -> anyhow::Result<Option<String>> {
        let url = format!(
            "{}/get?{}",
            self.base_url,
            query_string(track_name, artist_name)
        );

        let response = self.client.get(&url).send().await.context("lrclib get")?;

        if response.status().is_success() {
            let lyrics: LrclibResponse = response.json().await.context("decode lrclib get")?;
            Ok(lyrics.into_synced())
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            anyhow::bail!("LRCLIB API error: {}", response.status());
        }
    }

    async fn search(&self, track_name: &str, artist_name: &str) -> anyhow::Result<Option<String>> {
        let url = format!(
            "{}/search?{}",
            self.base_url,
            query_string(track_name, artist_name)
        );

        let response = self.client.get(&url).send().await.context("lrclib search")?;

        if response.status().is_success() {
            let results: Vec<LrclibResponse> =
                response.json().await.context("decode lrclib search")?;
            Ok(results.into_iter().find_map(LrclibResponse::into_synced))
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            anyhow::bail!("LRCLIB search error: {}", response.status());
        }
    }
}

fn query_string(track_name: &str, artist_name: &str) -> String {
    format!(
        "artist_name={}&track_name={}",
        urlencoding::encode(artist_name),
        urlencoding::encode(track_name)
    )
}

/// Strip suffixes like " - Remastered 2011" or " (Live)" that LRCLIB doesn't index.
pub fn clean_title(title: &str) -> &str {
    let title = title.split(" - ").next().unwrap_or(title);
    title.split(" (").next().unwrap_or(title)
}
