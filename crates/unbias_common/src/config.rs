//! UnBias configuration
//!
//! Config file: ~/.config/unbias/config.toml or /etc/unbias/config.toml
//! Environment overrides: UNBIAS_ANALYSIS_URL, UNBIAS_REWRITE_URL, UNBIAS_TIMEOUT_SECS

use crate::api::EXTRACT_FIELDS_RAW_TEXT;
use crate::types::InputMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ANALYSIS_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REWRITE_URL: &str = "https://mumbaihacks25unbias.onrender.com/api/unbias";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_ANALYSIS_URL: &str = "UNBIAS_ANALYSIS_URL";
pub const ENV_REWRITE_URL: &str = "UNBIAS_REWRITE_URL";
pub const ENV_TIMEOUT_SECS: &str = "UNBIAS_TIMEOUT_SECS";

/// Remote service endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL serving /api/extract-text and /api/analyze
    #[serde(default = "default_analysis_base_url")]
    pub analysis_base_url: String,

    /// Full URL of the rewrite endpoint
    #[serde(default = "default_rewrite_url")]
    pub rewrite_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Field selector for the extraction endpoint
    #[serde(default = "default_extract_fields")]
    pub extract_fields: String,
}

fn default_analysis_base_url() -> String {
    DEFAULT_ANALYSIS_BASE_URL.to_string()
}

fn default_rewrite_url() -> String {
    DEFAULT_REWRITE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_extract_fields() -> String {
    EXTRACT_FIELDS_RAW_TEXT.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            analysis_base_url: default_analysis_base_url(),
            rewrite_url: default_rewrite_url(),
            timeout_secs: default_timeout_secs(),
            extract_fields: default_extract_fields(),
        }
    }
}

impl ApiConfig {
    pub fn extract_url(&self) -> String {
        format!("{}/api/extract-text", self.analysis_base_url.trim_end_matches('/'))
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.analysis_base_url.trim_end_matches('/'))
    }
}

/// Interface preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Analyzer mode selected at startup
    #[serde(default)]
    pub default_mode: InputMode,

    /// Plain ASCII instead of emoji glyphs
    #[serde(default)]
    pub ascii: bool,
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbiasConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl UnbiasConfig {
    /// Default user config path: ~/.config/unbias/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Cannot determine config directory")?;
        Ok(config_dir.join("unbias").join("config.toml"))
    }

    /// System config path: /etc/unbias/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/unbias/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. User config (~/.config/unbias/config.toml)
    /// 3. System config (/etc/unbias/config.toml)
    /// 4. Defaults
    ///
    /// Environment overrides are applied on top of whichever source won.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let user = Self::user_config_path().ok();
        Self::load_with(
            explicit,
            user.as_deref(),
            &Self::system_config_path(),
            |key| std::env::var(key).ok(),
        )
    }

    /// `load` with the file locations and environment supplied by the caller
    pub fn load_with<F>(
        explicit: Option<&Path>,
        user: Option<&Path>,
        system: &Path,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => match user.filter(|p| p.exists()) {
                Some(path) => Self::load_from(path)?,
                None if system.exists() => Self::load_from(system)?,
                None => Self::default(),
            },
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1 second");
        }
        Ok(())
    }

    /// Parse a single config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Apply UNBIAS_* overrides from `lookup` (the environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_ANALYSIS_URL).filter(|v| !v.trim().is_empty()) {
            self.api.analysis_base_url = url;
        }
        if let Some(url) = lookup(ENV_REWRITE_URL).filter(|v| !v.trim().is_empty()) {
            self.api.rewrite_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECS))?;
        }
        Ok(())
    }

    /// Write the configuration, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let toml_string = self.to_toml()?;
        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
