//! LRCLIB API client
//!
//! LRCLIB is a free lyrics API that provides plain and synchronized (LRC format) lyrics.
//! API Documentation: https://lrclib.net/docs

use super::LyricsProvider;
use super::parser::ParsedLyrics;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

/// LRCLIB API record
#[derive(Debug, Deserialize, Clone)]
pub struct LrclibRecord {
    #[serde(rename = "plainLyrics")]
    pub plain_lyrics: Option<String>,
    #[serde(rename = "syncedLyrics")]
    pub synced_lyrics: Option<String>,
}

impl LrclibRecord {
    /// Plain lyrics, or the synced lyrics with timestamps stripped.
    pub fn text(&self) -> Option<String> {
        if let Some(plain) = self.plain_lyrics.as_deref().map(str::trim)
            && !plain.is_empty() {
                return Some(plain.to_string());
            }

        let synced = self.synced_lyrics.as_deref()?;
        let text = ParsedLyrics::parse(synced).plain_text();
        (!text.is_empty()).then_some(text)
    }

    fn has_lyrics(&self) -> bool {
        self.plain_lyrics.as_deref().is_some_and(|l| !l.trim().is_empty())
            || self.synced_lyrics.as_deref().is_some_and(|l| !l.trim().is_empty())
    }
}

/// LRCLIB API client
#[derive(Debug, Clone)]
pub struct LrclibClient {
    client: reqwest::Client,
    base_url: String,
}

impl LrclibClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get lyrics with exact match
    async fn get_exact(
        &self,
        track_name: &str,
        artist_name: &str,
    ) -> anyhow::Result<Option<LrclibRecord>> {
        let url = format!(
            "{}/get?track_name={}&artist_name={}",
            self.base_url,
            urlencoding::encode(track_name),
            urlencoding::encode(artist_name)
        );

        let response = self.client.get(&url).send().await.context("send lrclib get request")?;

        if response.status().is_success() {
            let record: LrclibRecord = response.json().await.context("parse lrclib json")?;
            Ok(Some(record))
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            anyhow::bail!("LRCLIB API error: {}", response.status());
        }
    }

    /// Search for lyrics
    async fn search(
        &self,
        track_name: &str,
        artist_name: &str,
    ) -> anyhow::Result<Option<LrclibRecord>> {
        let query = format!("{} {}", track_name, artist_name);
        let url = format!(
            "{}/search?q={}",
            self.base_url,
            urlencoding::encode(&query)
        );

        let response = self.client.get(&url).send().await.context("send lrclib search request")?;

        if response.status().is_success() {
            let results: Vec<LrclibRecord> =
                response.json().await.context("parse lrclib search json")?;
            Ok(results.into_iter().find(LrclibRecord::has_lyrics))
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            anyhow::bail!("LRCLIB search error: {}", response.status());
        }
    }
}

#[async_trait]
impl LyricsProvider for LrclibClient {
    fn name(&self) -> &str {
        "lrclib"
    }

    async fn fetch_lyrics(&self, artist: &str, title: &str) -> anyhow::Result<Option<String>> {
        // Exact match first, search as the fallback
        let record = match self.get_exact(title, artist).await? {
            Some(record) => Some(record),
            None => self.search(title, artist).await?,
        };

        Ok(record.and_then(|r| r.text()))
    }
}
