//! Storefront configuration.
//!
//! Resolution order: built-in defaults, then the TOML file named by
//! `SMART_RETAIL_CONFIG`, then `SMART_RETAIL_*` environment overrides.

use std::path::PathBuf;
use std::time::Duration;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_PATH_ENV: &str = "SMART_RETAIL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Channel capacity for actors and the session event stream.
    pub actor_buffer: usize,
    pub search_delay_ms: u64,
    pub voice_delay_ms: u64,
    pub image_delay_ms: u64,
    pub ar_delay_ms: u64,
    pub reveal_initial_delay_ms: u64,
    pub reveal_step_ms: u64,
    pub suggestion_limit: usize,
    pub fixture_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            search_delay_ms: 1500,
            voice_delay_ms: 2000,
            image_delay_ms: 3000,
            ar_delay_ms: 2000,
            reveal_initial_delay_ms: 500,
            reveal_step_ms: 300,
            suggestion_limit: 4,
            fixture_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Loads the process configuration from file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "Loaded config file");
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        debug!(?config, "Configuration resolved");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Applies `SMART_RETAIL_*` overrides read through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let millis: [(&str, &mut u64); 6] = [
            ("SMART_RETAIL_SEARCH_DELAY_MS", &mut self.search_delay_ms),
            ("SMART_RETAIL_VOICE_DELAY_MS", &mut self.voice_delay_ms),
            ("SMART_RETAIL_IMAGE_DELAY_MS", &mut self.image_delay_ms),
            ("SMART_RETAIL_AR_DELAY_MS", &mut self.ar_delay_ms),
            ("SMART_RETAIL_REVEAL_INITIAL_DELAY_MS", &mut self.reveal_initial_delay_ms),
            ("SMART_RETAIL_REVEAL_STEP_MS", &mut self.reveal_step_ms),
        ];
        for (key, slot) in millis {
            if let Some(value) = lookup(key) {
                *slot = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.clone(),
                })?;
            }
        }
        if let Some(path) = lookup("SMART_RETAIL_FIXTURE_PATH") {
            self.fixture_path = Some(PathBuf::from(path));
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.actor_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                key: "actor_buffer".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn voice_delay(&self) -> Duration {
        Duration::from_millis(self.voice_delay_ms)
    }

    pub fn image_delay(&self) -> Duration {
        Duration::from_millis(self.image_delay_ms)
    }

    pub fn ar_delay(&self) -> Duration {
        Duration::from_millis(self.ar_delay_ms)
    }

    pub fn reveal_initial_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_initial_delay_ms)
    }

    pub fn reveal_step(&self) -> Duration {
        Duration::from_millis(self.reveal_step_ms)
    }
}
