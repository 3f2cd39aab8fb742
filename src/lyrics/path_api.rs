//! Lyrics APIs addressed as `{base}/{artist}/{title}`
//!
//! lyrics.ovh and lyrist share this contract: a GET with percent-encoded
//! path segments answering `{"lyrics": "..."}`.

use super::LyricsProvider;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LyricsBody {
    lyrics: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PathLyricsApi {
    name: &'static str,
    base_url: String,
    client: reqwest::Client,
}

impl PathLyricsApi {
    pub fn new(name: &'static str, base_url: &str, client: reqwest::Client) -> Self {
        Self {
            name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn lyrics_url(&self, artist: &str, title: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        )
    }
}

#[async_trait]
impl LyricsProvider for PathLyricsApi {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch_lyrics(&self, artist: &str, title: &str) -> anyhow::Result<Option<String>> {
        let response = self
            .client
            .get(self.lyrics_url(artist, title))
            .send()
            .await
            .with_context(|| format!("send {} request", self.name))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            anyhow::bail!("{} API error: {}", self.name, status);
        }

        let body: LyricsBody = response
            .json()
            .await
            .with_context(|| format!("parse {} json", self.name))?;

        Ok(body
            .lyrics
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()))
    }
}
