//! LRC format parser
//!
//! Parses synchronized lyrics in LRC format:
//! [mm:ss.xx] Lyrics line here
//!
//! Example:
//! [00:12.34] Hello world
//! [00:15.00] Another line

/// A single line of lyrics with timestamp
#[derive(Debug, Clone)]
pub struct LrcLine {
    /// Timestamp in milliseconds from start
    pub time_ms: u64,
    /// The lyrics text
    pub text: String,
}

impl LrcLine {
    pub fn new(time_ms: u64, text: String) -> Self {
        Self { time_ms, text }
    }
}

/// Lyrics lines in playback order
#[derive(Debug, Clone)]
pub struct ParsedLyrics {
    pub lines: Vec<LrcLine>,
}

impl ParsedLyrics {
    /// Parse LRC formatted lyrics
    ///
    /// Lines without a timestamp are kept at time zero.
    pub fn parse(content: &str) -> Self {
        let mut lines = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || Self::is_metadata_tag(line) {
                continue;
            }

            if let Some(parsed) = Self::parse_timed_line(line) {
                lines.extend(parsed);
                continue;
            }

            if !line.starts_with('[') {
                lines.push(LrcLine::new(0, line.to_string()));
            }
        }

        lines.sort_by_key(|l| l.time_ms);

        Self { lines }
    }

    /// Lyrics text without timestamps, one line per entry.
    ///
    /// Instrumental gaps (timestamps with no text) are dropped.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Metadata tags look like [ti:Title] or [ar:Artist]
    fn is_metadata_tag(line: &str) -> bool {
        let Some(rest) = line.strip_prefix('[') else {
            return false;
        };
        let Some(end) = rest.find(']') else {
            return false;
        };
        let Some((tag, _)) = rest[..end].split_once(':') else {
            return false;
        };

        tag.len() <= 3 && !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Parse a timed line like [00:12.34]Lyrics or [00:12.34][00:15.00]Lyrics
    fn parse_timed_line(line: &str) -> Option<Vec<LrcLine>> {
        let mut timestamps = Vec::new();
        let mut pos = 0;

        while pos < line.len() && line[pos..].starts_with('[') {
            let Some(end) = line[pos..].find(']') else {
                break;
            };
            let Some(ms) = Self::parse_timestamp(&line[pos + 1..pos + end]) else {
                break;
            };
            timestamps.push(ms);
            pos += end + 1;
        }

        if timestamps.is_empty() {
            return None;
        }

        let text = line[pos..].trim().to_string();

        Some(
            timestamps
                .into_iter()
                .map(|ts| LrcLine::new(ts, text.clone()))
                .collect(),
        )
    }

    /// Parse timestamp string like "00:12.34" or "00:12:34" to milliseconds
    fn parse_timestamp(s: &str) -> Option<u64> {
        let parts: Vec<&str> = s.split([':', '.']).collect();

        match parts.len() {
            2 => {
                let min: u64 = parts[0].parse().ok()?;
                let sec: u64 = parts[1].parse().ok()?;
                Some(min * 60 * 1000 + sec * 1000)
            }
            3 => {
                let min: u64 = parts[0].parse().ok()?;
                let sec: u64 = parts[1].parse().ok()?;
                let frac = parts[2];
                // "34" is centiseconds, "340" milliseconds
                let ms: u64 = match frac.len() {
                    1 => frac.parse::<u64>().ok()? * 100,
                    2 => frac.parse::<u64>().ok()? * 10,
                    3 => frac.parse().ok()?,
                    _ => return None,
                };
                Some(min * 60 * 1000 + sec * 1000 + ms)
            }
            _ => None,
        }
    }
}
