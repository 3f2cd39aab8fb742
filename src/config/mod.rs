use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

/// Key value shipped in sample configs; treated the same as no key.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_AUDD_API_KEY_HERE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recognition: RecognitionConfig,
    pub lyrics: LyricsConfig,
}

impl Config {
    // A zero timeout fails every request immediately.
    fn sanitized(mut self) -> Self {
        if self.recognition.timeout_secs == 0 {
            tracing::warn!(
                default = defaults::RECOGNITION_TIMEOUT_SECS,
                "recognition.timeout_secs is 0, using default"
            );
            self.recognition.timeout_secs = defaults::RECOGNITION_TIMEOUT_SECS;
        }
        if self.lyrics.timeout_secs == 0 {
            tracing::warn!(
                default = defaults::LYRICS_TIMEOUT_SECS,
                "lyrics.timeout_secs is 0, using default"
            );
            self.lyrics.timeout_secs = defaults::LYRICS_TIMEOUT_SECS;
        }
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// AudD API token. Missing or placeholder keys switch to demo mode.
    pub api_key: Option<String>,
    pub endpoint: String,
    /// Upper bound for the upload and response, in seconds.
    pub timeout_secs: u64,
}

impl RecognitionConfig {
    /// Usable API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty() && *k != API_KEY_PLACEHOLDER)
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: defaults::AUDD_ENDPOINT.to_string(),
            timeout_secs: defaults::RECOGNITION_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsConfig {
    /// Provider keys in the order they are tried.
    pub providers: Vec<String>,
    /// Per-request bound for each provider, in seconds.
    pub timeout_secs: u64,
    pub lyrics_ovh_url: String,
    pub lyrist_url: String,
    pub lrclib_url: String,
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            providers: defaults::LYRICS_PROVIDERS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            timeout_secs: defaults::LYRICS_TIMEOUT_SECS,
            lyrics_ovh_url: defaults::LYRICS_OVH_URL.to_string(),
            lyrist_url: defaults::LYRIST_URL.to_string(),
            lrclib_url: defaults::LRCLIB_URL.to_string(),
        }
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_private(&path, cfg)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "songlens", "songlens").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_private(&path, &cfg)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg.sanitized())
}

// The file holds an API key, so keep it owner-readable only.
fn write_private(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}
