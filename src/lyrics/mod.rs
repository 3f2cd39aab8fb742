//! Lyrics lookup across several providers
//!
//! This module provides:
//! - the [`LyricsProvider`] capability implemented by every lyrics source
//! - [`LyricsResolver`], which tries providers in order and always answers
//!   with displayable text
//! - the LRCLIB client and LRC parser used by the optional LRCLIB source

pub mod lrclib;
pub mod parser;
pub mod path_api;

use crate::config::LyricsConfig;
use anyhow::Context;
use async_trait::async_trait;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

pub use lrclib::LrclibClient;
pub use path_api::PathLyricsApi;

pub const INSUFFICIENT_INFO: &str = "Insufficient information to search for lyrics.";
pub const LOOKUP_ERROR: &str = "Error retrieving lyrics. Please try again.";

const USER_AGENT: &str = concat!("songlens/", env!("CARGO_PKG_VERSION"));

/// A source of song lyrics.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Name used in log lines.
    fn name(&self) -> &str;

    /// Look up lyrics for a song.
    ///
    /// `Ok(None)` means the provider answered without usable lyrics; `Err`
    /// covers transport, status and body failures. Either way the resolver
    /// moves on to the next provider.
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> anyhow::Result<Option<String>>;
}

/// Providers the configuration can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    LyricsOvh,
    Lyrist,
    Lrclib,
}

impl ProviderKind {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "lyrics_ovh" | "lyrics.ovh" | "lyricsovh" => Some(Self::LyricsOvh),
            "lyrist" => Some(Self::Lyrist),
            "lrclib" | "lrc-lib" => Some(Self::Lrclib),
            _ => None,
        }
    }

    fn build(self, cfg: &LyricsConfig, client: &reqwest::Client) -> Box<dyn LyricsProvider> {
        match self {
            Self::LyricsOvh => Box::new(PathLyricsApi::new(
                "lyrics.ovh",
                &cfg.lyrics_ovh_url,
                client.clone(),
            )),
            Self::Lyrist => Box::new(PathLyricsApi::new("lyrist", &cfg.lyrist_url, client.clone())),
            Self::Lrclib => Box::new(LrclibClient::new(client.clone(), &cfg.lrclib_url)),
        }
    }
}

/// Ordered fallback chain of lyrics providers.
pub struct LyricsResolver {
    providers: Vec<Box<dyn LyricsProvider>>,
}

impl LyricsResolver {
    pub fn new(providers: Vec<Box<dyn LyricsProvider>>) -> Self {
        Self { providers }
    }

    /// Build the chain named by `cfg.providers`.
    ///
    /// Unknown keys are skipped and repeated providers are only tried once.
    /// All providers share one HTTP client bounded by `cfg.timeout_secs`
    /// per request.
    pub fn from_config(cfg: &LyricsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build reqwest client")?;

        let mut kinds: Vec<ProviderKind> = Vec::new();
        for key in &cfg.providers {
            match ProviderKind::from_key(key) {
                Some(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Some(_) => {}
                None => tracing::warn!(provider = %key, "unknown lyrics provider, skipping"),
            }
        }

        let providers = kinds.into_iter().map(|k| k.build(cfg, &client)).collect();
        let resolver = Self::new(providers);
        tracing::debug!(providers = ?resolver.provider_names(), "lyrics providers configured");
        Ok(resolver)
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Lyrics for `title` by `artist`, or a message explaining why there are none.
    pub async fn get_lyrics(&self, title: &str, artist: &str) -> String {
        if title.is_empty() || artist.is_empty() {
            tracing::warn!("title or artist missing, skipping lyrics lookup");
            return INSUFFICIENT_INFO.to_string();
        }

        match AssertUnwindSafe(self.lookup(title, artist)).catch_unwind().await {
            Ok(lyrics) => lyrics,
            Err(_) => {
                tracing::error!(%artist, %title, "lyrics lookup aborted");
                LOOKUP_ERROR.to_string()
            }
        }
    }

    async fn lookup(&self, title: &str, artist: &str) -> String {
        let clean_title = title.trim();
        let clean_artist = artist.trim();

        for provider in &self.providers {
            let name = provider.name();
            tracing::info!(provider = name, %artist, %title, "trying lyrics provider");

            match provider.fetch_lyrics(clean_artist, clean_title).await {
                Ok(Some(lyrics)) if !lyrics.trim().is_empty() => {
                    tracing::info!(provider = name, "lyrics found");
                    return lyrics.trim().to_string();
                }
                Ok(_) => tracing::debug!(provider = name, "no lyrics from provider"),
                Err(e) => tracing::warn!(
                    provider = name,
                    error = ?e,
                    "lyrics provider unavailable, trying next"
                ),
            }
        }

        tracing::warn!(%artist, %title, "no lyrics source returned a result");
        not_found_message(title, artist)
    }
}

/// Fallback text pointing at a manual web search.
pub fn not_found_message(title: &str, artist: &str) -> String {
    format!(
        "Lyrics not found for:\n{artist} - {title}\n\nYou can search for them manually at:\nhttps://www.google.com/search?q={}+{}+lyrics",
        urlencoding::encode(artist.trim()),
        urlencoding::encode(title.trim())
    )
}
