//! Server configuration.
//!
//! Values come from an optional YAML file and are then overridden by
//! environment variables. Every key is optional; the defaults reproduce a
//! server on `localhost:9999` serving the working directory.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "TINYSERVE_CONFIG";

/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

/// Config file picked up from the working directory when `TINYSERVE_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "tinyserve.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub mime: MimeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

/// Where request paths are looked up on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Prefix prepended verbatim to every request path.
    pub root: String,
    /// Document served for `/`.
    pub index: String,
    /// Reject resolved paths that escape `root` (e.g. via `..`).
    pub confine_to_root: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MimeConfig {
    /// Extra `.ext -> type` entries merged over the built-in table.
    pub extra: HashMap<String, String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "localhost:9999".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            index: "index.html".to_string(),
            confine_to_root: false,
        }
    }
}

impl Config {
    /// Loads the configuration for this process.
    ///
    /// Reads the file named by `TINYSERVE_CONFIG` (which must exist), or
    /// `tinyserve.yaml` if present in the working directory, then applies
    /// the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

impl StaticFilesConfig {
    /// Static config rooted at `root`, other settings left at their defaults.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into().to_string_lossy().into_owned(),
            ..Self::default()
        }
    }
}
