use crate::utils::errors::{Result, VocabError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEEPL_FREE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";
pub const DEFAULT_CONFIG_PATH: &str = "vocab-tools.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub translation: TranslationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub endpoint: String,
    pub request_delay_ms: u64,
    pub max_attempts: u32,
    pub backoff_base_ms: u64,
    pub jitter_ms: u64,
    pub timeout_seconds: u64,
    pub progress_every: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEEPL_FREE_ENDPOINT.to_string(),
            request_delay_ms: 300,
            max_attempts: 10,
            backoff_base_ms: 1000,
            jitter_ms: 1000,
            timeout_seconds: 30,
            progress_every: 50,
        }
    }
}

impl TranslationConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| VocabError::ConfigError(format!("{}: {}", path.as_ref().display(), e)))?;
        toml::from_str(&content).map_err(|e| VocabError::ConfigError(e.to_string()))
    }

    /// An explicit path must load; otherwise the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::load_or_default(Some(DEFAULT_CONFIG_PATH))),
        }
    }

    pub fn load_or_default(path: Option<&str>) -> Self {
        if let Some(p) = path {
            Self::load_from_file(p).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
