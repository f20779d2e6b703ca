use crate::error::{Result, VatApiError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Name of the configuration profile on disk.
pub const PROFILE_NAME: &str = "vatapi-cli";

pub const DEFAULT_BASE_URL: &str = "https://vatapi.com/v1";

/// Overrides the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "VATAPI_CONFIG_DIR";

/// Overrides the service base URL (e.g. to point at a local mock server).
pub const BASE_URL_ENV: &str = "VATAPI_BASE_URL";

/// Keys understood by the configuration profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ApiKey,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ApiKey => "apiKey",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for vatapi, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VatApiConfig {
    /// Secret sent as the `apikey` header. Empty means "not configured".
    #[serde(rename = "apiKey", default)]
    pub api_key: String,
}

impl VatApiConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: VatApiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::ApiKey => &self.api_key,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) {
        match key {
            ConfigKey::ApiKey => self.api_key = value.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        if self.api_key.is_empty() {
            return None;
        }
        let chars: Vec<char> = self.api_key.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        Some(format!("{}{}", "*".repeat(8), tail))
    }
}

/// Resolves the directory holding the configuration profile.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "vatapi", PROFILE_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(VatApiError::ConfigDir)
}

pub fn base_url() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
