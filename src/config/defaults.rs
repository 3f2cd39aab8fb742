use super::Config;

pub const AUDD_ENDPOINT: &str = "https://api.audd.io/";
pub const RECOGNITION_TIMEOUT_SECS: u64 = 30;

pub const LYRICS_PROVIDERS: [&str; 2] = ["lyrics_ovh", "lyrist"];
pub const LYRICS_TIMEOUT_SECS: u64 = 10;
pub const LYRICS_OVH_URL: &str = "https://api.lyrics.ovh/v1";
pub const LYRIST_URL: &str = "https://lyrist.vercel.app/api";
pub const LRCLIB_URL: &str = "https://lrclib.net/api";

/// Configuration written on first run.
pub fn defaults() -> Config {
    Config::default()
}
