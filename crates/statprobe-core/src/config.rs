use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::target::DEFAULT_STATS_PATH;

/// Header carrying the credential when the config does not override it.
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Global configuration loaded from `~/.config/statprobe/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSettings {
    /// Whole-request timeout in seconds (connect included).
    pub timeout_secs: u64,
    /// Path of the stats endpoint on the target host.
    #[serde(default = "default_stats_path")]
    pub stats_path: String,
    /// Header name the credential is sent under.
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,
    /// Follow 3xx redirects from the endpoint.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

fn default_stats_path() -> String {
    DEFAULT_STATS_PATH.to_string()
}

fn default_api_key_header() -> String {
    DEFAULT_API_KEY_HEADER.to_string()
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            stats_path: default_stats_path(),
            api_key_header: default_api_key_header(),
            follow_redirects: default_follow_redirects(),
        }
    }
}

impl ProbeSettings {
    /// Request timeout; 0 would disable curl's timeout, so it is raised to 1s.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("statprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration for a probe without writing anything to disk.
///
/// A missing file yields the defaults. An unreadable or malformed file is
/// logged and also yields the defaults, so a bad config never stops a probe.
pub fn load_or_default() -> ProbeSettings {
    match xdg::BaseDirectories::with_prefix("statprobe") {
        Ok(dirs) => load_or_default_at(&dirs.get_config_file("config.toml")),
        Err(e) => {
            tracing::warn!("no config dir, using defaults: {}", e);
            ProbeSettings::default()
        }
    }
}

/// Like `load_or_default` but for an explicit path.
pub fn load_or_default_at(path: &Path) -> ProbeSettings {
    if !path.exists() {
        return ProbeSettings::default();
    }
    let loaded = fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))
        .and_then(|data| {
            toml::from_str::<ProbeSettings>(&data)
                .with_context(|| format!("parse {}", path.display()))
        });
    match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("ignoring config, using defaults: {:#}", e);
            ProbeSettings::default()
        }
    }
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProbeSettings> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like `load_or_init` but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ProbeSettings> {
    if !path.exists() {
        let default_cfg = ProbeSettings::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ProbeSettings =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
