//! Mapping of AudD recognition responses onto [`SongInfo`].

use crate::models::SongInfo;
use serde_json::Value;

const UNKNOWN: &str = "Unknown";
const AMAZON_SEARCH_URL: &str = "https://www.amazon.com/s?k=";

/// Extract a song from a recognition response body.
///
/// Returns `None` unless `status` is `"success"` and `result` is an object.
/// Nested streaming links are optional and fall back to empty strings.
pub fn song_from_response(v: &Value) -> Option<SongInfo> {
    if v.get("status").and_then(Value::as_str) != Some("success") {
        return None;
    }
    let result = v.get("result").filter(|r| r.is_object())?;

    let title = text_or(result.get("title"), UNKNOWN);
    let artist = text_or(result.get("artist"), UNKNOWN);
    let album = text_or(result.get("album"), UNKNOWN);
    let amazon_url = amazon_search_url(&artist, &title, &album);

    Some(SongInfo {
        release_date: text_or(result.get("release_date"), ""),
        label: text_or(result.get("label"), ""),
        spotify_url: text_or(result.pointer("/spotify/external_urls/spotify"), ""),
        apple_music_url: text_or(result.pointer("/apple_music/url"), ""),
        cover_art_url: text_or(result.pointer("/spotify/album/images/0/url"), ""),
        amazon_url,
        title,
        artist,
        album,
        ..Default::default()
    })
}

/// Marketplace search link for a physical copy of the album.
pub fn amazon_search_url(artist: &str, title: &str, album: &str) -> String {
    let query = format!("{artist} {title} {album} CD");
    format!("{AMAZON_SEARCH_URL}{}", urlencoding::encode(&query))
}

// Strings are taken as-is; other scalars keep their JSON text.
fn text_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_response() {
        let v = json!({
            "status": "success",
            "result": {
                "title": "Numb",
                "artist": "Linkin Park",
                "album": "Meteora",
                "release_date": "2003-03-25",
                "label": "Warner Bros.",
                "spotify": {
                    "external_urls": { "spotify": "https://open.spotify.com/track/abc" },
                    "album": { "images": [
                        { "url": "https://i.scdn.co/image/large" },
                        { "url": "https://i.scdn.co/image/small" }
                    ]}
                },
                "apple_music": { "url": "https://music.apple.com/us/album/numb" }
            }
        });

        let song = song_from_response(&v).unwrap();
        assert_eq!(song.title, "Numb");
        assert_eq!(song.artist, "Linkin Park");
        assert_eq!(song.album, "Meteora");
        assert_eq!(song.release_date, "2003-03-25");
        assert_eq!(song.label, "Warner Bros.");
        assert_eq!(song.spotify_url, "https://open.spotify.com/track/abc");
        assert_eq!(song.apple_music_url, "https://music.apple.com/us/album/numb");
        assert_eq!(song.cover_art_url, "https://i.scdn.co/image/large");
        assert_eq!(
            song.amazon_url,
            "https://www.amazon.com/s?k=Linkin%20Park%20Numb%20Meteora%20CD"
        );
        assert!(song.lyrics.is_empty());
        assert!(song.other_versions.is_empty());
    }

    #[test]
    fn test_title_only_uses_defaults() {
        let v = json!({ "status": "success", "result": { "title": "Solo" } });

        let song = song_from_response(&v).unwrap();
        assert_eq!(song.title, "Solo");
        assert_eq!(song.artist, "Unknown");
        assert_eq!(song.album, "Unknown");
        assert_eq!(song.release_date, "");
        assert_eq!(song.label, "");
        assert_eq!(song.spotify_url, "");
        assert_eq!(song.apple_music_url, "");
        assert_eq!(song.cover_art_url, "");
        assert_eq!(
            song.amazon_url,
            "https://www.amazon.com/s?k=Unknown%20Solo%20Unknown%20CD"
        );
    }

    #[test]
    fn test_partial_nested_paths() {
        let v = json!({
            "status": "success",
            "result": {
                "title": "T",
                "artist": null,
                "spotify": { "album": { "images": [] } },
                "apple_music": "not-an-object"
            }
        });

        let song = song_from_response(&v).unwrap();
        assert_eq!(song.artist, "Unknown");
        assert_eq!(song.spotify_url, "");
        assert_eq!(song.cover_art_url, "");
        assert_eq!(song.apple_music_url, "");
    }

    #[test]
    fn test_non_string_scalars_keep_json_text() {
        let v = json!({ "status": "success", "result": { "title": 1999, "release_date": 2001 } });

        let song = song_from_response(&v).unwrap();
        assert_eq!(song.title, "1999");
        assert_eq!(song.release_date, "2001");
    }

    #[test]
    fn test_rejects_failed_or_empty_results() {
        assert!(song_from_response(&json!({ "status": "error", "result": { "title": "x" } })).is_none());
        assert!(song_from_response(&json!({ "status": "success", "result": null })).is_none());
        assert!(song_from_response(&json!({ "status": "success" })).is_none());
        assert!(song_from_response(&json!({ "result": { "title": "x" } })).is_none());
        assert!(song_from_response(&json!([])).is_none());
    }

    #[test]
    fn test_amazon_url_encodes_reserved_characters() {
        let url = amazon_search_url("AC/DC", "T.N.T.", "High Voltage & More");
        assert_eq!(
            url,
            "https://www.amazon.com/s?k=AC%2FDC%20T.N.T.%20High%20Voltage%20%26%20More%20CD"
        );
    }
}
