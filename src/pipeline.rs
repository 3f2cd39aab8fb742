use crate::lyrics::LyricsResolver;
use crate::models::SongInfo;
use crate::recognition::Recognizer;
use std::path::Path;
use tokio::io::AsyncRead;

/// Recognize a sample, then attach lyrics for the recognized title and artist.
///
/// Records that already carry lyrics (demo mode) are returned untouched.
pub async fn identify<R>(
    recognizer: &Recognizer,
    resolver: &LyricsResolver,
    audio: R,
    file_name: &str,
) -> Option<SongInfo>
where
    R: AsyncRead + Unpin,
{
    let song = recognizer.recognize(audio, file_name).await?;
    Some(with_lyrics(resolver, song).await)
}

/// [`identify`] for a sample stored on disk.
pub async fn identify_file(
    recognizer: &Recognizer,
    resolver: &LyricsResolver,
    path: &Path,
) -> Option<SongInfo> {
    let song = recognizer.recognize_file(path).await?;
    Some(with_lyrics(resolver, song).await)
}

pub async fn with_lyrics(resolver: &LyricsResolver, mut song: SongInfo) -> SongInfo {
    if song.lyrics.is_empty() {
        song.lyrics = resolver.get_lyrics(&song.title, &song.artist).await;
    }
    song
}
