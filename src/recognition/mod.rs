//! Audio recognition through the AudD API
//!
//! Uploads an audio sample as multipart form data and maps the match onto a
//! [`SongInfo`]. Without a usable API key the recognizer answers with a fixed
//! demo record instead of calling the API.

pub mod response;

use crate::config::RecognitionConfig;
use crate::models::SongInfo;
use anyhow::Context;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Declared for every upload, whatever the sample's real encoding.
const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";
const RETURN_SERVICES: &str = "apple_music,spotify";

#[derive(Debug, Clone)]
pub struct Recognizer {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl Recognizer {
    pub fn new(cfg: &RecognitionConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            api_key: cfg.api_key().map(str::to_string),
        })
    }

    pub fn is_demo_mode(&self) -> bool {
        self.api_key.is_none()
    }

    /// Identify the song in `audio`.
    ///
    /// `file_name` is only sent as the name of the uploaded part. Every
    /// failure (read, transport, status, body) is logged and becomes `None`.
    pub async fn recognize<R>(&self, mut audio: R, file_name: &str) -> Option<SongInfo>
    where
        R: AsyncRead + Unpin,
    {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("AudD API key not configured, returning demo song");
            return Some(demo_song_info());
        };

        match self.identify(&mut audio, file_name, api_key).await {
            Ok(song) => song,
            Err(e) => {
                tracing::error!(file = file_name, error = ?e, "audio recognition failed");
                None
            }
        }
    }

    /// Identify the song stored at `path`, using the file name for the upload.
    pub async fn recognize_file(&self, path: &Path) -> Option<SongInfo> {
        if self.is_demo_mode() {
            return self.recognize(tokio::io::empty(), "demo").await;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        match tokio::fs::File::open(path).await {
            Ok(file) => self.recognize(file, &file_name).await,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "open audio file");
                None
            }
        }
    }

    async fn identify<R>(
        &self,
        audio: &mut R,
        file_name: &str,
        api_key: &str,
    ) -> anyhow::Result<Option<SongInfo>>
    where
        R: AsyncRead + Unpin,
    {
        let mut bytes = Vec::new();
        audio
            .read_to_end(&mut bytes)
            .await
            .context("read audio stream")?;

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(AUDIO_CONTENT_TYPE)
            .context("build audio part")?;
        let form = Form::new()
            .part("file", part)
            .text("api_token", api_key.to_string())
            .text("return", RETURN_SERVICES);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .context("send recognition request")?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "recognition API returned an error status");
            return Ok(None);
        }

        let v: serde_json::Value = response.json().await.context("parse recognition json")?;
        let song = response::song_from_response(&v);

        match &song {
            Some(s) => tracing::info!(title = %s.title, artist = %s.artist, "song recognized"),
            None => tracing::debug!(
                status = v.get("status").and_then(|s| s.as_str()).unwrap_or_default(),
                "recognition API returned no match"
            ),
        }

        Ok(song)
    }
}

/// Placeholder record returned while no API key is configured.
pub fn demo_song_info() -> SongInfo {
    SongInfo {
        title: "Demo Song".to_string(),
        artist: "Demo Artist".to_string(),
        album: "Demo Album".to_string(),
        release_date: "2024".to_string(),
        label: "Demo Label".to_string(),
        lyrics: "This is a demo. Configure your AudD API key to use real recognition.".to_string(),
        other_versions: vec!["Acoustic Version".to_string(), "Remix".to_string()],
        ..Default::default()
    }
}
