//! Configuration file handling for the CLI.
//!
//! Stored in `$XDG_CONFIG_HOME/tradedesk/config.toml` (or the platform
//! equivalent). The API URL given on the command line or through
//! `TRADEDESK_API_URL` wins over the file, which wins over the default.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use tradedesk_business::{BusinessConfig, DEFAULT_API_BASE_URL};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

/// Where the effective API URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    Flag,
    File,
    Default,
}

impl std::fmt::Display for UrlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Flag => "--api-url / TRADEDESK_API_URL",
            Self::File => "config file",
            Self::Default => "default",
        })
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "tradedesk", "tradedesk")
            .context("Failed to determine config directory")?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location.
    ///
    /// A missing file is an empty config. An unreadable or invalid one is
    /// logged and replaced by the defaults so `config set-url` can still
    /// overwrite it.
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(err) => {
                warn!("{err:#}; using the default configuration");
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            warn!("{err:#}; using the default configuration");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.api.base_url = Some(BusinessConfig::new(url).api_url().to_owned());
    }

    /// The API URL to use and where it came from.
    pub fn resolve_base_url(&self, flag: Option<&str>) -> (String, UrlSource) {
        let non_empty = |s: &&str| !s.trim().is_empty();
        if let Some(url) = flag.filter(non_empty) {
            return (url.to_owned(), UrlSource::Flag);
        }
        if let Some(url) = self.api.base_url.as_deref().filter(non_empty) {
            return (url.to_owned(), UrlSource::File);
        }
        (DEFAULT_API_BASE_URL.to_owned(), UrlSource::Default)
    }

    pub fn business_config(&self, flag: Option<&str>) -> BusinessConfig {
        BusinessConfig::new(self.resolve_base_url(flag).0)
    }
}
