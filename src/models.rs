use serde::{Deserialize, Serialize};

/// Metadata for a recognized song.
///
/// Every field defaults to an empty string or empty list, never `None`, so
/// callers can render a record without checking for missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongInfo {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub release_date: String,
    pub label: String,
    pub spotify_url: String,
    pub apple_music_url: String,
    pub amazon_url: String,
    pub cover_art_url: String,
    /// Filled by the lyrics lookup, except in demo mode.
    pub lyrics: String,
    pub other_versions: Vec<String>,
}
